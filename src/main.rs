//! CLI entry point: load a file into an editor and run queries against it

use anyhow::Result;
use clap::Parser;

use stanza::cli::CliArgs;
use stanza::Editor;

fn main() -> Result<()> {
    stanza::trace::init();

    let args = CliArgs::parse();
    let mut editor = match args.encoding.as_deref() {
        Some(label) => Editor::from_path_with_encoding(&args.path, label)?,
        None => Editor::from_path(&args.path)?,
    };

    if args.strip_blank {
        editor.remove_blank_lines();
    }

    if let Some(pattern) = &args.find {
        for idx in editor.find_all(pattern) {
            println!("{}: {}", idx, &editor[idx as isize]);
        }
        return Ok(());
    }

    if args.templates || args.constants {
        if args.templates {
            print_sorted(editor.templates());
        }
        if args.constants {
            print_sorted(editor.constants());
        }
        return Ok(());
    }

    match (args.head, args.tail) {
        (Some(n), _) => println!("{}", editor.head(n)),
        (None, Some(n)) => println!("{}", editor.tail(n)),
        (None, None) => println!("{}", editor),
    }

    Ok(())
}

fn print_sorted(names: std::collections::HashSet<String>) {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    for name in names {
        println!("{}", name);
    }
}
