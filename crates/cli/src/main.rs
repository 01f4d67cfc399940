fn main() -> catalogscope_cli::CliResult {
    catalogscope_cli::run()
}
