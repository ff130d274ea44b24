//! Print the shopping-list OpenAPI document as pretty JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use shopping_list::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let rendered = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "failed to render OpenAPI document: {err}");
            return ExitCode::FAILURE;
        }
    };
    match writeln!(io::stdout().lock(), "{rendered}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
