//! The interactive generator form.
//!
//! This command owns the session state: the current length, the class
//! toggles, the most recently generated password, and the moment of the
//! last successful copy. Each turn renders the state and handles one
//! single-letter command. Generation replaces the password whole; nothing
//! is kept once the session ends.

use rand::rngs::OsRng;
use std::time::Instant;

use crate::generator::{self, CharClass, ClassToggles, GenerateError, GenerationRequest};
use crate::ui;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 32;

const HELP: &str =
    "g=generate  c=copy  u/l/n/s=toggle class  +/-=length  <number>=set length  q=quit";

struct Session {
    length: usize,
    classes: ClassToggles,
    password: String,
    copied_at: Option<Instant>,
}

impl Session {
    fn new() -> Self {
        Self {
            length: 12,
            classes: ClassToggles::default(),
            password: String::new(),
            copied_at: None,
        }
    }

    /// Marker shown next to the password while the copied window is open.
    fn copied_marker(&self) -> &'static str {
        match self.copied_at {
            Some(t) if t.elapsed().as_secs() < ui::COPIED_WINDOW_SECS => "  (copied)",
            _ => "",
        }
    }
}

fn mark(on: bool) -> char {
    if on {
        'x'
    } else {
        ' '
    }
}

fn render(session: &Session) {
    println!();
    if session.password.is_empty() {
        println!("Password: (none yet)");
    } else {
        println!("Password: {}{}", session.password, session.copied_marker());
    }
    println!(
        "Length: {:2}   [{}] u)ppercase  [{}] l)owercase  [{}] n)umbers  [{}] s)ymbols",
        session.length,
        mark(session.classes.uppercase),
        mark(session.classes.lowercase),
        mark(session.classes.numbers),
        mark(session.classes.symbols),
    );
}

pub fn run() {
    println!("PassForge");
    println!("{}", HELP);

    let mut session = Session::new();

    loop {
        render(&session);

        let input = match ui::prompt_line("> ") {
            Some(line) => line,
            None => break,
        };

        match input.as_str() {
            "g" => {
                let request = GenerationRequest {
                    length: session.length,
                    classes: session.classes,
                };
                match generator::generate(&request, &mut OsRng) {
                    Ok(pwd) => {
                        log::debug!("generated a {}-character password", pwd.len());
                        session.password = pwd;
                        session.copied_at = None;
                    }
                    Err(GenerateError::NoClassSelected) => {
                        println!("Select at least one character type.");
                    }
                }
            }
            "c" => {
                if session.password.is_empty() {
                    continue;
                }
                match ui::copy_with_timed_clear(&session.password, ui::CLIPBOARD_CLEAR_SECS) {
                    Ok(()) => session.copied_at = Some(Instant::now()),
                    Err(e) => println!("Failed to copy to clipboard: {}", e),
                }
            }
            "u" => session.classes.toggle(CharClass::Uppercase),
            "l" => session.classes.toggle(CharClass::Lowercase),
            "n" => session.classes.toggle(CharClass::Numbers),
            "s" => session.classes.toggle(CharClass::Symbols),
            "+" => session.length = (session.length + 1).min(MAX_LENGTH),
            "-" => session.length = session.length.saturating_sub(1).max(MIN_LENGTH),
            "q" => break,
            "" => {}
            other => match other.parse::<usize>() {
                Ok(n) => session.length = n.clamp(MIN_LENGTH, MAX_LENGTH),
                Err(_) => println!("{}", HELP),
            },
        }
    }
}
