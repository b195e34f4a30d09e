use crate::config::Config;
use crate::dialog::{write_generator_summary, write_property_table, write_section};
use crate::wizard::{Wizard, WizardDefaults};
use anyhow::{anyhow, bail, Result};
use clap::Args;
use colored::Colorize;
use dtogen_common::{FileSystem, RealFileSystem};
use dtogen_compiler_php::CompileOptions;
use dtogen_generator::{with_preamble, GenerateError, GenerationRequest, Generator};
use dtogen_parser::pretty::format_error;
use dtogen_parser::{parse_properties, parse_reference, ClassIdentity, PropertyList};
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Debug, Args, Default)]
pub struct GenerateArgs {
    /// The DTO shortcut name, e.g. AcmeBlogBundle:Blog/PostDTO
    #[arg(long)]
    pub dto: Option<String>,

    /// Properties as space separated type:name pairs
    #[arg(long)]
    pub properties: Option<String>,

    /// Directory under the bundle where DTOs are placed (overrides config)
    #[arg(long)]
    pub root: Option<String>,

    /// Also generate an assembler skeleton
    #[arg(long)]
    pub with_assembler: bool,

    /// Domain type used by the assembler (overrides config)
    #[arg(long)]
    pub domain_type: Option<String>,

    /// Do not ask any question
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// Print generated files instead of writing them
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let interactive = !args.no_interaction && io::stdin().is_terminal();
    let stdin = io::stdin();
    let stdout = io::stdout();

    execute(
        &args,
        cwd,
        &RealFileSystem,
        interactive,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Run the generate command against explicit input, output and file system
pub fn execute<R: BufRead, W: Write>(
    args: &GenerateArgs,
    cwd: &str,
    fs: &dyn FileSystem,
    interactive: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = config.registry(cwd);

    let raw_properties = args.properties.as_deref().unwrap_or("");
    let properties = match parse_properties(raw_properties) {
        Ok(properties) => properties,
        Err(err) => {
            writeln!(out, "{}", format_error(&err, "--properties", raw_properties))?;
            return Err(anyhow!("invalid value for --properties: {}", err));
        }
    };

    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.root_directory.clone());

    let (identity, root, properties, with_assembler) = if interactive {
        let defaults = WizardDefaults {
            root,
            reference: args.dto.clone(),
            properties,
            with_assembler: args.with_assembler,
        };
        let outcome = Wizard::new(defaults, &registry, fs).run(input, out)?;
        (
            outcome.identity,
            outcome.root,
            outcome.properties,
            outcome.with_assembler,
        )
    } else {
        let reference = args
            .dto
            .as_deref()
            .ok_or_else(|| anyhow!("The DTO name is required (use --dto)"))?;
        let identity = parse_reference(reference)?;
        (identity, root, properties, args.with_assembler)
    };

    let options = CompileOptions {
        with_assembler,
        root_directory: root,
        assembler_domain_type: args
            .domain_type
            .clone()
            .unwrap_or_else(|| config.assembler_domain_type.clone()),
    };

    let generator = Generator::new(fs, &registry);
    let request = GenerationRequest::new(identity, properties, options);
    let plan = match generator.prepare(&request) {
        Ok(plan) => plan,
        Err(GenerateError::ArtifactExists { path }) => {
            tracing::debug!(path = %path.display(), "target already exists");
            bail!("DTO \"{}\" already exists.", request.identity.shortcut());
        }
        Err(err) => return Err(err.into()),
    };

    if args.stdout {
        for (index, artifact) in plan.artifacts.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "// {}", artifact.path.display())?;
            write!(out, "{}", with_preamble(&artifact.content))?;
        }
        return Ok(());
    }

    write_summary(
        out,
        &request.identity,
        &request.properties,
        request.options.with_assembler,
    )?;

    let mut errors = Vec::new();
    for artifact in &plan.artifacts {
        write!(out, "Generating {}: ", artifact.path.display())?;
        match generator.write(artifact) {
            Ok(()) => writeln!(out, "{}", "OK".green())?,
            Err(err) => {
                writeln!(out, "{}", "FAILED".red())?;
                errors.push(err.to_string());
                break;
            }
        }
    }

    write_generator_summary(out, &errors)?;

    if !errors.is_empty() {
        bail!("{}", errors.join("\n"));
    }
    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    identity: &ClassIdentity,
    properties: &PropertyList,
    with_assembler: bool,
) -> io::Result<()> {
    write_section(out, &["Summary before generation"], false)?;
    writeln!(
        out,
        "You are going to generate a \"{}\" DTO",
        identity.shortcut().yellow()
    )?;
    if with_assembler {
        writeln!(out, "with an Assembler class")?;
    }
    writeln!(out)?;

    if !properties.is_empty() {
        write_property_table(out, properties)?;
        writeln!(out)?;
    }
    Ok(())
}
