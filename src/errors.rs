#![allow(missing_docs)]
#![allow(unexpected_cfgs)]

pub use error_chain::bail;
use error_chain::error_chain;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        ZeroStep {
            description("range step cannot be zero")
            display("Range step cannot be zero")
        }
        NotANumber(field: String) {
            description("range parameter is not a number")
            display("Range '{}' is not a number", field)
        }
        NotFinite(field: String) {
            description("range parameter is not finite")
            display("Range '{}' must be finite", field)
        }
        TooManyArguments(count: usize) {
            description("too many arguments for a range")
            display("A range takes at most 3 arguments (start, stop, step), {} were supplied", count)
        }
        Unbounded(range: String) {
            description("range is unbounded")
            display("{} is unbounded and cannot be materialized", range)
        }
    }

    foreign_links {
        Json(serde_json::Error);
    }
}
