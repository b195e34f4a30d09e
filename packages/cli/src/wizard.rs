//! Interactive collection of generator input.
//!
//! The wizard is an explicit state machine. Each line of input drives exactly
//! one transition; invalid input leaves the state unchanged and produces a
//! typed rejection that is shown before the same question is asked again.

use crate::dialog::{question, write_section};
use colored::Colorize;
use dtogen_bundle::{ContainerResolver, ResolverError};
use dtogen_common::FileSystem;
use dtogen_compiler_php::ArtifactKind;
use dtogen_generator::PlacementGuard;
use dtogen_parser::{
    infer_type, parse_reference, validate_confirmation, validate_dto_name,
    validate_property_name, ClassIdentity, ModelError, PropertyList, Rejection,
};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    AwaitRoot,
    AwaitReference,
    /// `pending_name` is set while waiting for the type of that property
    CollectingProperties { pending_name: Option<String> },
    AwaitAssemblerChoice,
    Done,
}

/// Why a line of input was not accepted
#[derive(Error, Debug)]
pub enum InputRejected {
    #[error(transparent)]
    Invalid(#[from] Rejection),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Container(#[from] ResolverError),

    #[error("DTO \"{0}\" already exists.")]
    AlreadyExists(String),
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Input ended before the DTO was fully described")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Values the wizard starts from, usually taken from command line flags
#[derive(Debug, Clone, Default)]
pub struct WizardDefaults {
    pub root: String,
    pub reference: Option<String>,
    pub properties: PropertyList,
    pub with_assembler: bool,
}

/// Completed answers
#[derive(Debug, Clone)]
pub struct WizardOutcome {
    pub root: String,
    pub identity: ClassIdentity,
    pub properties: PropertyList,
    pub with_assembler: bool,
}

pub struct Wizard<'a> {
    state: WizardState,
    root: String,
    default_reference: Option<String>,
    identity: Option<ClassIdentity>,
    properties: PropertyList,
    with_assembler: bool,
    resolver: &'a dyn ContainerResolver,
    fs: &'a dyn FileSystem,
}

impl<'a> Wizard<'a> {
    pub fn new(
        defaults: WizardDefaults,
        resolver: &'a dyn ContainerResolver,
        fs: &'a dyn FileSystem,
    ) -> Self {
        Self {
            state: WizardState::AwaitRoot,
            root: defaults.root,
            default_reference: defaults.reference,
            identity: None,
            properties: defaults.properties,
            with_assembler: defaults.with_assembler,
            resolver,
            fs,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Question for the current state
    pub fn prompt(&self) -> String {
        match &self.state {
            WizardState::AwaitRoot => question("Enter the root directory", Some(&self.root), ":"),
            WizardState::AwaitReference => question(
                "Enter the DTO name",
                self.default_reference.as_deref(),
                ":",
            ),
            WizardState::CollectingProperties { pending_name: None } => question(
                "New property name (press <return> to stop adding properties)",
                None,
                ":",
            ),
            WizardState::CollectingProperties {
                pending_name: Some(name),
            } => question("Property type", Some(infer_type(name)), ":"),
            WizardState::AwaitAssemblerChoice => question(
                "Do you want to generate a Skeleton Assembler class",
                Some(if self.with_assembler { "yes" } else { "no" }),
                "?",
            ),
            WizardState::Done => String::new(),
        }
    }

    /// Consume one line of input
    pub fn advance(&mut self, line: &str) -> Result<(), InputRejected> {
        let answer = line.trim();

        let next = match std::mem::replace(&mut self.state, WizardState::Done) {
            WizardState::AwaitRoot => {
                if !answer.is_empty() {
                    self.root = answer.to_string();
                }
                WizardState::AwaitReference
            }
            WizardState::AwaitReference => match self.accept_reference(answer) {
                Ok(identity) => {
                    self.identity = Some(identity);
                    WizardState::CollectingProperties { pending_name: None }
                }
                Err(rejected) => {
                    self.state = WizardState::AwaitReference;
                    return Err(rejected);
                }
            },
            WizardState::CollectingProperties { pending_name: None } => {
                if answer.is_empty() {
                    WizardState::AwaitAssemblerChoice
                } else {
                    match validate_property_name(&self.properties, answer) {
                        Ok(name) => WizardState::CollectingProperties {
                            pending_name: Some(name.to_string()),
                        },
                        Err(rejection) => {
                            self.state = WizardState::CollectingProperties { pending_name: None };
                            return Err(rejection.into());
                        }
                    }
                }
            }
            WizardState::CollectingProperties {
                pending_name: Some(name),
            } => {
                let type_ = if answer.is_empty() {
                    infer_type(&name)
                } else {
                    answer
                };
                // Incremental path: duplicates are rejected, never overwritten
                if let Err(err) = self.properties.add(&name, type_) {
                    self.state = WizardState::CollectingProperties { pending_name: None };
                    return Err(err.into());
                }
                WizardState::CollectingProperties { pending_name: None }
            }
            WizardState::AwaitAssemblerChoice => {
                match validate_confirmation(answer, self.with_assembler) {
                    Ok(choice) => {
                        self.with_assembler = choice;
                        WizardState::Done
                    }
                    Err(rejection) => {
                        self.state = WizardState::AwaitAssemblerChoice;
                        return Err(rejection.into());
                    }
                }
            }
            WizardState::Done => WizardState::Done,
        };

        self.state = next;
        Ok(())
    }

    fn accept_reference(&self, answer: &str) -> Result<ClassIdentity, InputRejected> {
        let answer = match (answer.is_empty(), self.default_reference.as_deref()) {
            (true, Some(default)) => default,
            _ => answer,
        };

        let reference = validate_dto_name(answer)?;
        let identity = parse_reference(reference)?;
        let container = self.resolver.resolve_container(&identity.container_name)?;

        let file_name = ArtifactKind::Main.file_name(identity.class_name());
        let path = PlacementGuard::resolve(&container, &identity, &self.root, &file_name);
        if self.fs.exists(&path) {
            return Err(InputRejected::AlreadyExists(identity.shortcut()));
        }

        Ok(identity)
    }

    /// The collected answers, once the wizard reached `Done`
    pub fn finish(self) -> Option<WizardOutcome> {
        match (self.state, self.identity) {
            (WizardState::Done, Some(identity)) => Some(WizardOutcome {
                root: self.root,
                identity,
                properties: self.properties,
                with_assembler: self.with_assembler,
            }),
            _ => None,
        }
    }

    /// Drive the wizard from `input`, writing questions and rejections to `output`
    pub fn run<R: BufRead, W: Write>(
        mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<WizardOutcome, WizardError> {
        write_section(output, &["Welcome to the DTOGen DTO generator"], false)?;
        writeln!(output, "This command helps you generate Data Transfer Objects (DTOs).")?;
        writeln!(output)?;
        writeln!(output, "First, you need to specify the root directory for the objects.")?;
        writeln!(
            output,
            "Then specify the DTO name in shortcut notation like {}.",
            "AcmeBlogBundle:PostDTO".yellow()
        )?;
        writeln!(output)?;

        let mut line = String::new();
        while self.state != WizardState::Done {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(WizardError::UnexpectedEof);
            }

            let was_collecting = matches!(self.state, WizardState::CollectingProperties { .. });
            match self.advance(&line) {
                Ok(()) => {
                    let collecting = matches!(self.state, WizardState::CollectingProperties { .. });
                    if collecting && !was_collecting {
                        writeln!(output)?;
                        writeln!(output, "Start adding properties to the DTO")?;
                        writeln!(output)?;
                    }
                }
                Err(rejected) => {
                    tracing::debug!(%rejected, "input rejected");
                    writeln!(output, "{}", rejected.to_string().red())?;
                }
            }
        }

        self.finish().ok_or(WizardError::UnexpectedEof)
    }
}
