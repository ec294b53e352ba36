use anyhow::{Context, Result};
use std::{env, path::PathBuf, process};
use veilmark_config::Config;
use veilmark_engine::{format_markdown, io, render_markdown};

const USAGE: &str = "\
Usage:
  veilmark-cli format <text>
  veilmark-cli render [--json] <file.md>
  veilmark-cli build [content-dir] [output-dir]
  veilmark-cli init <content-dir> <output-dir>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Format a single line of text.
    Format(String),
    /// Render one markdown file to stdout.
    Render { path: PathBuf, json: bool },
    /// Render a directory tree; missing paths come from the config file.
    Build {
        content: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    /// Write the config file used by `build`.
    Init { content: PathBuf, output: PathBuf },
}

fn parse_args(args: &[String]) -> Option<Command> {
    let (name, rest) = args.split_first()?;
    match (name.as_str(), rest) {
        ("format", [text]) => Some(Command::Format(text.clone())),
        ("render", [path]) => Some(Command::Render {
            path: PathBuf::from(path),
            json: false,
        }),
        ("render", [flag, path]) if flag == "--json" => Some(Command::Render {
            path: PathBuf::from(path),
            json: true,
        }),
        ("build", [content, output]) => Some(Command::Build {
            content: Some(PathBuf::from(content)),
            output: Some(PathBuf::from(output)),
        }),
        ("build", [content]) => Some(Command::Build {
            content: Some(PathBuf::from(content)),
            output: None,
        }),
        ("build", []) => Some(Command::Build {
            content: None,
            output: None,
        }),
        ("init", [content, output]) => Some(Command::Init {
            content: PathBuf::from(content),
            output: PathBuf::from(output),
        }),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    match command {
        Command::Format(text) => println!("{}", format_markdown(&text)),
        Command::Render { path, json } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let doc = render_markdown(&content);
            if json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{}", doc.to_html());
            }
        }
        Command::Build { content, output } => {
            let (content_path, output_path) = resolve_build_paths(content, output)?;
            log::info!(
                "Rendering {} into {}",
                content_path.display(),
                output_path.display()
            );

            if let Err(e) = io::validate_content_dir(&content_path) {
                eprintln!("Error: {e}");
                process::exit(1);
            }

            let written = io::render_tree(&content_path, &output_path)?;
            log::info!("Rendered {} posts", written.len());
            for path in written {
                println!("{path}");
            }
        }
        Command::Init { content, output } => {
            let config = Config {
                content_path: content,
                output_path: output,
            };
            config.save().context("Failed to save config")?;
            log::info!("Config saved to {}", Config::config_path().display());
        }
    }

    Ok(())
}

/// Fills paths not given on the command line from the config file.
fn resolve_build_paths(
    content: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(PathBuf, PathBuf)> {
    if let (Some(content), Some(output)) = (&content, &output) {
        return Ok((content.clone(), output.clone()));
    }

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    match Config::load()? {
        Some(config) => Ok((
            content.unwrap_or(config.content_path),
            output.unwrap_or(config.output_path),
        )),
        None => {
            eprintln!("Error: No paths provided and no config file found");
            eprintln!("{USAGE}");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_format() {
        assert_eq!(
            parse_args(&args(&["format", "**hi**"])),
            Some(Command::Format("**hi**".to_string()))
        );
    }

    #[test]
    fn parses_render_with_and_without_json() {
        assert_eq!(
            parse_args(&args(&["render", "post.md"])),
            Some(Command::Render {
                path: PathBuf::from("post.md"),
                json: false
            })
        );
        assert_eq!(
            parse_args(&args(&["render", "--json", "post.md"])),
            Some(Command::Render {
                path: PathBuf::from("post.md"),
                json: true
            })
        );
    }

    #[test]
    fn parses_build_with_optional_paths() {
        assert_eq!(
            parse_args(&args(&["build"])),
            Some(Command::Build {
                content: None,
                output: None
            })
        );
        assert_eq!(
            parse_args(&args(&["build", "posts", "public"])),
            Some(Command::Build {
                content: Some(PathBuf::from("posts")),
                output: Some(PathBuf::from("public"))
            })
        );
    }

    #[test]
    fn rejects_unknown_or_incomplete_commands() {
        assert_eq!(parse_args(&args(&[])), None);
        assert_eq!(parse_args(&args(&["format"])), None);
        assert_eq!(parse_args(&args(&["render", "--yaml", "post.md"])), None);
        assert_eq!(parse_args(&args(&["publish"])), None);
        assert_eq!(parse_args(&args(&["init", "posts"])), None);
    }

    #[test]
    fn parses_init() {
        assert_eq!(
            parse_args(&args(&["init", "~/blog/posts", "~/blog/public"])),
            Some(Command::Init {
                content: PathBuf::from("~/blog/posts"),
                output: PathBuf::from("~/blog/public")
            })
        );
    }

    #[test]
    fn explicit_build_paths_skip_config() {
        let (content, output) = resolve_build_paths(
            Some(PathBuf::from("posts")),
            Some(PathBuf::from("public")),
        )
        .unwrap();
        assert_eq!(content, PathBuf::from("posts"));
        assert_eq!(output, PathBuf::from("public"));
    }

    #[test]
    fn rendered_doc_serializes_with_kind_tags() {
        let doc = render_markdown("## Dicas\n- Renda\n\ntexto");
        let value = serde_json::to_value(&doc).unwrap();

        let blocks = value["blocks"].as_array().unwrap();
        assert_eq!(blocks[0]["kind"], "heading");
        assert_eq!(blocks[0]["level"], 2);
        assert_eq!(blocks[0]["id"], "dicas");
        assert_eq!(blocks[1]["kind"], "list");
        assert_eq!(blocks[1]["list_kind"], "unordered");
        assert_eq!(blocks[1]["items"][0]["html"], "Renda");
        assert_eq!(blocks[2]["kind"], "paragraph");
        assert_eq!(blocks[2]["span"]["start"], 18);
    }
}
