//! `tkdemo`: a command-line tour of termkit.
//!
//! ```text
//! tkdemo style "Build failed" --style "color: red; font-weight: bold"
//! tkdemo table orders.json --border light --column id=ID --column name=Customer
//! tkdemo list --ordered milk eggs bread
//! tkdemo form signup.json --prefix "    -> "
//! tkdemo mail --to ada@example.com --subject Hi --body "Hello"
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termkit::{BorderStyle, ColorChoice};
use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives.
const LOG_ENV: &str = "TERMKIT_LOG";

#[derive(Parser)]
#[command(name = "tkdemo")]
#[command(about = "Styled text, tables, lists and forms in the terminal")]
#[command(version)]
struct Cli {
    /// When to emit ANSI escape sequences: auto, always or never
    #[arg(long, global = true, env = "TERMKIT_COLOR", default_value = "auto")]
    color: ColorChoice,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print text with a CSS-like style
    Style {
        text: String,

        /// Style declarations, e.g. "color: red; font-weight: bold"
        #[arg(short, long, default_value = "")]
        style: String,
    },

    /// Render a JSON array of records as a table
    Table {
        /// JSON file to read; stdin when omitted
        file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Border::Ascii)]
        border: Border,

        /// Style declarations for header cells
        #[arg(long)]
        header_style: Option<String>,

        /// Column to show, as KEY or KEY=LABEL; repeatable
        #[arg(short, long = "column")]
        columns: Vec<String>,
    },

    /// Print items as a list
    List {
        items: Vec<String>,

        /// Number the items
        #[arg(short, long)]
        ordered: bool,

        #[arg(long, default_value = "-")]
        bullet: String,

        /// Index format for ordered lists; %d is the index
        #[arg(long, default_value = "%d.")]
        format: String,
    },

    /// Ask the questions described by a JSON form and print the answers
    Form {
        /// JSON object mapping field keys to field configs
        config: PathBuf,

        #[arg(long, default_value = "")]
        prefix: String,

        #[arg(long, default_value = ": ")]
        suffix: String,
    },

    /// Show the message an SMTP mailer would send, using SMTP_* settings
    Mail {
        #[arg(long)]
        to: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        body: String,

        /// Send the body as plain text
        #[arg(long)]
        plain: bool,

        /// Override the sender, as "Name <email>"
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Border {
    Ascii,
    Light,
    Heavy,
    Double,
    Rounded,
}

impl From<Border> for BorderStyle {
    fn from(border: Border) -> Self {
        match border {
            Border::Ascii => BorderStyle::Ascii,
            Border::Light => BorderStyle::Light,
            Border::Heavy => BorderStyle::Heavy,
            Border::Double => BorderStyle::Double,
            Border::Rounded => BorderStyle::Rounded,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let color = cli.color;
    match cli.command {
        Commands::Style { text, style } => commands::style(&text, &style, color),
        Commands::Table {
            file,
            border,
            header_style,
            columns,
        } => commands::table(file.as_deref(), border.into(), header_style, &columns, color),
        Commands::List {
            items,
            ordered,
            bullet,
            format,
        } => commands::list(&items, ordered, bullet, format),
        Commands::Form {
            config,
            prefix,
            suffix,
        } => commands::form(&config, prefix, suffix, color),
        Commands::Mail {
            to,
            subject,
            body,
            plain,
            from,
        } => commands::mail(&to, &subject, &body, !plain, from.as_deref()),
    }
}
