//! list subcommand
//!
//! Prints the available checks without contacting any service.

use crate::suite::{self, CheckCase};

/// Render the case list as a tab separated table
pub fn render(cases: &[CheckCase]) -> String {
    let mut out = String::from("CASE\tTARGET\tROUTE\tEXPECT\n");
    for case in cases {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            case.name,
            case.operation.default_target(),
            case.operation.path(),
            case.expectation
        ));
    }
    out
}

/// Execute the list command
pub fn execute() {
    print!("{}", render(&suite::default_cases()));
}
