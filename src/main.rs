extern crate structopt;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sdai_typed::gen::{gen_file, GenOptions};
use sdai_typed::schema::load_schema;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sdai-typed",
    about = "Checks schema descriptions and generates typed accessors for them."
)]
enum App {
    #[structopt(about = "Checks that a schema description is correct")]
    Lint {
        #[structopt(long, parse(from_os_str), default_value = "./schema.exp")]
        schema_file: PathBuf,
    },
    #[structopt(about = "Generates Rust wrappers for the entities, selects and enumerations")]
    Gen {
        #[structopt(long, parse(from_os_str), default_value = "./schema.exp")]
        schema_file: PathBuf,
        /// Writes to this file instead of stdout
        #[structopt(long, parse(from_os_str))]
        output: Option<PathBuf>,
        #[structopt(long, default_value = "sdai_typed")]
        runtime_crate: String,
    },
}

fn run(app: App) -> Result<(), Box<dyn Error>> {
    match app {
        App::Lint { schema_file } => {
            let schema = load_schema(&schema_file, true)?;
            println!(
                "{}: {} types, {} enumerations, {} selects, {} entities",
                schema_file.display(),
                schema.types.len(),
                schema.enumerations.len(),
                schema.selects.len(),
                schema.entities.len(),
            );
        }
        App::Gen {
            schema_file,
            output,
            runtime_crate,
        } => {
            let schema = load_schema(&schema_file, true)?;
            let content = gen_file(&schema, &GenOptions { runtime_crate })?;
            match output {
                Some(path) => {
                    fs::write(&path, content)?;
                    info!(output = %path.display(), "wrappers written");
                }
                None => print!("{}", content),
            }
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(App::from_args()) {
        eprintln!("{}", e);
        exit(1)
    }
}
