use std::process::Command;

struct Check {
    name: &'static str,
    about: &'static str,
}

fn main() {
    let preamble = "Documentation about the various scripts contained herein\n\n\
                    All checks print a single line and exit 0 (OK), 1 (Warning) or 2 (Critical or error).\n";

    let checks = [
        Check {
            name: "check-redis-ping",
            about: "Needs PING.",
        },
        Check {
            name: "check-redis-connection",
            about: "Needs ECHO.",
        },
        Check {
            name: "check-redis-connected-clients",
            about: "Needs INFO and CONFIG GET.",
        },
        Check {
            name: "check-redis-maxmemory",
            about: "Needs INFO and CONFIG GET. Fails if maxmemory is not set.",
        },
        Check {
            name: "check-redis-memory",
            about: "Needs INFO.",
        },
    ];

    let mut out: String = cp(preamble.split('\n'));
    out.push_str("\n");
    out.push_str(&cp(checks.iter().map(|c| format!("- [{0}](#{0})", c.name))));
    out.push_str("\n");
    for check in &checks {
        out.push_str(&format!(
            "\
//!
//! # {0}
//!
//! {1}
//!
//! ```plain
//! $ {0} --help
",
            check.name, check.about
        ));
        let cout = String::from_utf8(
            Command::new(&format!("target/debug/{}", check.name))
                .args(&["--help"])
                .output()
                .unwrap_or_else(|e| panic!("Couldn't execute command {}: {}", check.name, e))
                .stdout,
        )
        .unwrap_or_else(|e| panic!("Couldn't convert command {} help to utf8: {}", check.name, e));
        out.push_str(&cp(cout.split('\n')));
        out.push_str("\n//! ```\n");
    }
    out.push_str("\n");
    print!("{}", out);
}

/// Comment each line in the iterator
fn cp<S: AsRef<str>, I: Iterator<Item = S>>(s: I) -> String {
    s.map(|s| format!("//! {}", s.as_ref()))
        .map(|s| s.trim().into())
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::cp;

    #[test]
    fn comments_every_line() {
        assert_eq!(cp("one\n  two\n".split('\n')), "//! one\n//!   two\n//!");
    }
}
