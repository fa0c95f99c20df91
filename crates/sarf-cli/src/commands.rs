use crate::{
    cli::{QueryCommand, ShellCommand},
    error::CliError,
    render,
};
use sarf::core::{
    lexicon::Lexicon,
    obs::{EventOps, metrics_report},
    scheme::Scheme,
    snapshot::LexiconReport,
};
use serde::Serialize;
use std::io::Write;

///
/// ReportView
/// JSON shape of `report --json`.
///

#[derive(Debug, Serialize)]
struct ReportView {
    lexicon: LexiconReport,
    events: EventOps,
}

pub(crate) fn execute(
    command: &QueryCommand,
    lexicon: &mut Lexicon,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        QueryCommand::Tree { json: true } => json(&lexicon.tree_snapshot(), out)?,
        QueryCommand::Tree { json: false } => render::tree(lexicon.roots(), out)?,
        QueryCommand::Roots => render::roots(lexicon.roots(), out)?,
        QueryCommand::Schemes {
            json: true,
            buckets: true,
        } => json(&lexicon.scheme_table_snapshot(), out)?,
        QueryCommand::Schemes {
            json: true,
            buckets: false,
        } => json(&lexicon.schemes().get_all(), out)?,
        QueryCommand::Schemes {
            json: false,
            buckets: true,
        } => render::buckets(lexicon.schemes(), out)?,
        QueryCommand::Schemes {
            json: false,
            buckets: false,
        } => render::schemes(lexicon.schemes(), out)?,
        QueryCommand::Generate { root, scheme } => {
            let word = lexicon.generate(root.trim(), scheme.trim())?;
            writeln!(out, "{word}")?;
        }
        QueryCommand::Validate { word, root } => {
            match lexicon.validate(word.trim(), root.trim())? {
                Some(scheme) => writeln!(out, "valid: {} ({})", scheme.name, scheme.pattern)?,
                None => writeln!(out, "invalid: no stored scheme turns {root} into {word}")?,
            }
        }
        QueryCommand::Analyze { word } => match lexicon.analyze(word.trim()) {
            Some(found) => writeln!(
                out,
                "root: {}, scheme: {} ({}){}",
                found.root,
                found.scheme.name,
                found.scheme.pattern,
                if found.cached { ", cached" } else { "" }
            )?,
            None => writeln!(out, "no known root derives {word}")?,
        },
        QueryCommand::Report { json: true } => json(
            &ReportView {
                lexicon: lexicon.report(),
                events: metrics_report().counters.ops,
            },
            out,
        )?,
        QueryCommand::Report { json: false } => {
            render::report(&lexicon.report(), &metrics_report().counters.ops, out)?;
        }
    }

    Ok(())
}

/// Shell-only mutations. Query commands are delegated to [`execute`].
pub(crate) fn apply(
    command: ShellCommand,
    lexicon: &mut Lexicon,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        ShellCommand::Query(query) => execute(&query, lexicon, out)?,
        ShellCommand::AddRoot { root } => {
            let root = root.trim();
            if lexicon.add_root(root)? {
                writeln!(out, "added root {root}")?;
            } else {
                writeln!(out, "root {root} already known")?;
            }
        }
        ShellCommand::AddScheme { name, pattern } => {
            let (name, pattern) = (name.trim(), pattern.trim());
            lexicon.add_scheme(Scheme::new(name, pattern))?;
            writeln!(out, "added scheme {name} = {pattern}")?;
        }
        ShellCommand::EditScheme { old, name, pattern } => {
            let scheme = Scheme::new(name.trim(), pattern.trim());
            lexicon.edit_scheme(old.trim(), scheme)?;
            writeln!(out, "updated scheme {}", old.trim())?;
        }
        ShellCommand::RemoveScheme { name } => match lexicon.remove_scheme(name.trim()) {
            Some(removed) => writeln!(out, "removed scheme {}", removed.name)?,
            None => writeln!(out, "no scheme named {}", name.trim())?,
        },
        ShellCommand::Help | ShellCommand::Quit => {}
    }

    Ok(())
}

fn json(value: &impl Serialize, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use sarf::config::LexiconConfig;
    use std::path::Path;

    fn seeded() -> Lexicon {
        let (lexicon, _) = LexiconConfig::default()
            .build(Path::new("."))
            .expect("builtin seeds");

        lexicon
    }

    fn run(command: QueryCommand, lexicon: &mut Lexicon) -> String {
        let mut out = Vec::new();
        execute(&command, lexicon, &mut out).expect("command succeeds");

        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn generate_prints_word() {
        let mut lexicon = seeded();
        let text = run(
            QueryCommand::Generate {
                root: "كتب".into(),
                scheme: "اسم فاعل".into(),
            },
            &mut lexicon,
        );

        assert_eq!(text, "كَاتِب\n");
    }

    #[test]
    fn validate_reports_scheme() {
        let mut lexicon = seeded();
        let text = run(
            QueryCommand::Validate {
                word: "مَدْرُوس".into(),
                root: "درس".into(),
            },
            &mut lexicon,
        );

        assert_eq!(text, "valid: اسم مفعول (مَفْعُول)\n");
    }

    #[test]
    fn analyze_uses_seeded_roots() {
        let mut lexicon = seeded();
        let text = run(
            QueryCommand::Analyze {
                word: "مَفْهُوم".into(),
            },
            &mut lexicon,
        );

        assert_eq!(text, "root: فهم, scheme: اسم مفعول (مَفْعُول)\n");
    }

    #[test]
    fn tree_json_is_null_when_empty() {
        let mut lexicon = Lexicon::new();
        let text = run(QueryCommand::Tree { json: true }, &mut lexicon);

        assert_eq!(text.trim(), "null");
    }

    #[test]
    fn scheme_json_lists_store_order() {
        let mut lexicon = seeded();
        let text = run(
            QueryCommand::Schemes {
                json: true,
                buckets: false,
            },
            &mut lexicon,
        );
        let schemes: Vec<Scheme> = serde_json::from_str(&text).expect("scheme list json");

        assert_eq!(schemes.len(), 7);
        assert_eq!(schemes[0].name, "المضارع");
    }

    #[test]
    fn unknown_scheme_is_a_lexicon_error() {
        let mut lexicon = seeded();
        let err = execute(
            &QueryCommand::Generate {
                root: "كتب".into(),
                scheme: "مجهول".into(),
            },
            &mut lexicon,
            &mut Vec::new(),
        )
        .expect_err("unknown scheme");

        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "NotFound: scheme not found: 'مجهول'");
    }
}
