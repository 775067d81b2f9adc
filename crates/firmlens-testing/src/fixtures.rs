//! Canned CSV exports and config snippets for tests.

/// A clean two-year export: two attorneys, three clients, two practice
/// areas, five matters. No coercion failures.
pub const SAMPLE_CSV: &str = "\
Activity date,\"User full name (first, last)\",Practice area,Matter location,Matter status,Matter billing method,Company name,Matter number,Billed hours,Unbilled hours,Non-billable hours,Billed & Unbilled hours,Billed hours value,Utilization rate,Tracked hours,User rate
03/10/2023,Jane Doe,IP,New York,Open,Hourly,Acme,M-100,5.0,1.0,0.5,6.0,2000,70,6.5,400
06/12/2023,John Roe,Litigation,Chicago,Open,Hourly,Globex,M-200,3.0,0.0,1.0,3.0,900,55,4.0,300
01/15/2024,Jane Doe,IP,New York,Open,Hourly,Acme,M-101,7.5,0.5,0.0,8.0,3000,80,8.0,400
02/20/2024,John Roe,Litigation,Chicago,Pending,Flat,Globex,M-200,4.0,1.0,0.0,5.0,1600,60,5.0,300
05/05/2024,Jane Doe,IP,New York,Closed,Hourly,Initech,M-300,2.0,0.0,0.5,2.0,800,75,2.5,400
";

/// Same shape, with coercion failures: one junk numeric cell, one junk
/// date, one empty hours cell.
pub const MESSY_CSV: &str = "\
Activity date,\"User full name (first, last)\",Practice area,Company name,Matter number,Billed hours,Billed hours value
01/15/2024,Jane Doe,IP,Acme,M-101,seven,3000
someday,John Roe,Litigation,Globex,M-200,4.0,1600
05/05/2024,Jane Doe,IP,Initech,M-300,,800
";

/// Config body mapping the sample attorneys to levels. `{dataset}` is
/// substituted by the TestWorld.
pub const SAMPLE_CONFIG: &str = r#"dataset = "{dataset}"

[levels]
"Jane Doe" = "Senior Counsel"
"John Roe" = "Paralegal"
"#;
