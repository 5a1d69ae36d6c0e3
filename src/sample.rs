//! The built-in expense report used by "load example".

/// Source label the sample is shown under.
pub const SAMPLE_SOURCE_NAME: &str = "Example CSV";

pub const SAMPLE_CSV: &str = r#"
Cardholder,Card name,Merchant,Amount,Category,GL code,Project,Cost code,Cost type,Date,Note
John Doe,John Doe Personal Card,Gas Station Plus,$25.50,Fuel,5010 - Travel Expenses,"Project Alpha:Phase 1",Fuel & Mileage,Direct Project Cost,05/20/2024,Refuel truck
Jane Smith,Jane Smith Business Card,Office Supplies Co.,$78.20,Office Supplies,6020 - Office Supplies,"Internal:Admin",General Supplies,Overhead,05/21/2024,Printer paper and pens
Robert Johnson,Robert Johnson Corp Card,Tech Gadgets Inc.,$199.99,Electronics,1500 - Equipment Purchase,"Project Beta:Setup",Computer Hardware,Capital Expenditure,05/22/2024,New monitor for dev team
Emily White,Emily White Travel Card,Cloud Services LLC,$50.00,Software Subscription,7030 - Software & Subscriptions,"Project Gamma:Deployment",Cloud Hosting,Operational Expense,05/23/2024,Monthly server cost
"#;

/// The sample text as it is fed to the parser.
pub fn sample_text() -> &'static str {
    SAMPLE_CSV.trim()
}
