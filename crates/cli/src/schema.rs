use crate::CliResult;
use catalogscope_api::{CourseDetail, CourseIdentity, ErrorBody, SectionSummary, TermsResponse};
use schemars::schema_for;

pub fn run() -> CliResult {
    println!("Catalog HTTP Interface:");
    println!("=======================");

    println!("\n1. GET /semester");
    println!("{}", serde_json::to_string_pretty(&schema_for!(TermsResponse))?);

    println!("\n2. GET /semester/{{term}}/courses?subject=&code=&page=&limit=");
    println!("   page and limit are positive integers (defaults 1 and 10); result may be empty");
    println!(
        "{}",
        serde_json::to_string_pretty(&schema_for!(Vec<CourseIdentity>))?
    );

    println!("\n3. GET /semester/{{term}}/courses/{{subject}}/{{code}}");
    println!("   subject: 2-4 characters, code: 3-4 characters");
    println!("{}", serde_json::to_string_pretty(&schema_for!(CourseDetail))?);

    println!("\n4. GET /semester/{{term}}/courses/{{subject}}/{{code}}/{{section}}");
    println!("   section: 1-4 characters");
    println!("{}", serde_json::to_string_pretty(&schema_for!(SectionSummary))?);

    println!("\nErrors (400 invalid parameters, 404 not found, 502 upstream failure):");
    println!("{}", serde_json::to_string_pretty(&schema_for!(ErrorBody))?);

    Ok(())
}
