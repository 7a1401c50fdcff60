use std::io::{IsTerminal, Write};

use anyhow::bail;
use clap::Parser;
use clap::error::ErrorKind;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::Commands;
use crate::cli::{GlobalFlags, ShellLine};
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;
use crate::write_lock;

const PROMPT: &str = "lpad> ";

/// Handle `lpad shell`: run one command per stdin line against a single
/// context, so session-only state (phase checks, testing notes) carries
/// across lines. A failing line is reported and the session continues.
///
/// Collections are re-read before every line; lines that write hold the
/// project write lock only while they run.
pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            eprint!("{PROMPT}");
            let _ = std::io::stderr().flush();
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }
        if let Err(error) = run_line(line, ctx, flags).await {
            eprintln!("lpad error: {error:#}");
        }
    }
    Ok(())
}

async fn run_line(line: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let words = split_words(line)?;
    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            println!("{}", error.render());
            return Ok(());
        }
        Err(error) => bail!("{}", error.render().to_string().trim_end()),
    };

    if matches!(parsed.command, Commands::Init(_) | Commands::Shell) {
        bail!("'{}' is not available inside the shell", words[0]);
    }

    let _lock = if write_lock::requires_write_lock(&parsed.command) {
        let data_dir = ctx.config.storage.data_path(&ctx.project_root);
        Some(write_lock::acquire(&data_dir).await?)
    } else {
        None
    };
    ctx.reload_collections()?;
    dispatch(parsed.command, ctx, flags).await
}

/// Split a line into words, honouring single quotes, double quotes and
/// backslash escapes (outside single quotes).
fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let Some(escaped) = chars.next() else {
                    bail!("trailing backslash");
                };
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(open) = quote {
        bail!("unterminated {open} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::split_words;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_words("idea  list\t--limit 3").unwrap(), vec![
            "idea", "list", "--limit", "3"
        ]);
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"idea add --name Ada --title "Tiny CRM" --description 'for "bakers"'"#)
                .unwrap(),
            vec![
                "idea",
                "add",
                "--name",
                "Ada",
                "--title",
                "Tiny CRM",
                "--description",
                "for \"bakers\"",
            ]
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(split_words(r#"link add --url x --note """#).unwrap(), vec![
            "link", "add", "--url", "x", "--note", ""
        ]);
    }

    #[test]
    fn backslash_escapes_next_char() {
        assert_eq!(split_words(r"note add it\'s\ fine").unwrap(), vec![
            "note", "add", "it's fine"
        ]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split_words("note add \"oops").is_err());
    }
}
