//! Generate one password and print it.

use rand::rngs::OsRng;

use crate::cli::GenArgs;
use crate::generator::{self, ClassToggles, GenerateError, GenerationRequest};
use crate::ui;

pub fn run(args: GenArgs) {
    let request = GenerationRequest {
        length: args.length as usize,
        classes: ClassToggles {
            uppercase: !args.no_uppercase,
            lowercase: !args.no_lowercase,
            numbers: !args.no_numbers,
            symbols: args.symbols,
        },
    };

    let pwd = match generator::generate(&request, &mut OsRng) {
        Ok(p) => p,
        Err(GenerateError::NoClassSelected) => {
            println!("Select at least one character type.");
            return;
        }
    };

    log::debug!("generated a {}-character password", pwd.len());
    println!("{}", pwd);

    if args.copy {
        if let Err(e) = ui::copy_with_timed_clear(&pwd, ui::CLIPBOARD_CLEAR_SECS) {
            println!("Failed to copy to clipboard: {}", e);
        }
    }
}
