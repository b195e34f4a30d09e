use crate::error::GenerateResult;
use crate::placement::PlacementGuard;
use dtogen_bundle::{Container, ContainerResolver};
use dtogen_common::FileSystem;
use dtogen_compiler_php::{render, ArtifactKind, CompileOptions};
use dtogen_parser::{parse_properties, parse_reference, ClassIdentity, PropertyList};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Everything needed for one generator run
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub identity: ClassIdentity,
    pub properties: PropertyList,
    pub options: CompileOptions,
}

impl GenerationRequest {
    pub fn new(identity: ClassIdentity, properties: PropertyList, options: CompileOptions) -> Self {
        Self {
            identity,
            properties,
            options,
        }
    }

    /// Build a request from the raw `container:Path/NameDTO` reference and
    /// `type:name` property list.
    pub fn parse(reference: &str, raw_properties: &str, options: CompileOptions) -> GenerateResult<Self> {
        let identity = parse_reference(reference)?;
        let properties = parse_properties(raw_properties)?;
        Ok(Self::new(identity, properties, options))
    }
}

/// A rendered artifact and the path it will be written to
#[derive(Debug, Clone, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Rendered text, without the file preamble
    pub content: String,
}

/// The checked, rendered result of a request, ready to be written
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub container: Container,
    pub artifacts: Vec<PlannedArtifact>,
}

/// Runs the parse -> check -> render -> write pipeline
pub struct Generator<'a> {
    fs: &'a dyn FileSystem,
    resolver: &'a dyn ContainerResolver,
}

impl<'a> Generator<'a> {
    pub fn new(fs: &'a dyn FileSystem, resolver: &'a dyn ContainerResolver) -> Self {
        Self { fs, resolver }
    }

    fn guard(&self) -> PlacementGuard<'a> {
        PlacementGuard::new(self.fs)
    }

    /// Resolve the container and the destination of every requested artifact
    pub fn target_paths(
        &self,
        identity: &ClassIdentity,
        options: &CompileOptions,
    ) -> GenerateResult<(Container, Vec<(ArtifactKind, PathBuf)>)> {
        let container = self.resolver.resolve_container(&identity.container_name)?;

        let paths = ArtifactKind::requested(options)
            .into_iter()
            .map(|kind| {
                let file_name = kind.file_name(identity.class_name());
                let path = PlacementGuard::resolve(
                    &container,
                    identity,
                    &options.root_directory,
                    &file_name,
                );
                (kind, path)
            })
            .collect();

        Ok((container, paths))
    }

    /// Check every target before rendering anything.
    ///
    /// A single existing target aborts the whole request; nothing touches the
    /// file system until `write` is called.
    #[instrument(skip(self, request), fields(dto = %request.identity))]
    pub fn prepare(&self, request: &GenerationRequest) -> GenerateResult<GenerationPlan> {
        let (container, paths) = self.target_paths(&request.identity, &request.options)?;

        let guard = self.guard();
        for (_, path) in &paths {
            guard.check_available(path)?;
        }

        let rendered = render(
            &request.identity,
            &container,
            &request.properties,
            &request.options,
        );
        debug!(
            artifacts = rendered.len(),
            properties = request.properties.len(),
            "rendered"
        );

        let artifacts = rendered
            .into_iter()
            .zip(paths)
            .map(|(artifact, (kind, path))| {
                debug_assert_eq!(artifact.kind, kind);
                PlannedArtifact {
                    kind,
                    path,
                    content: artifact.content,
                }
            })
            .collect();

        Ok(GenerationPlan {
            container,
            artifacts,
        })
    }

    /// Write a single planned artifact
    pub fn write(&self, artifact: &PlannedArtifact) -> GenerateResult<()> {
        self.guard().write(&artifact.path, &artifact.content)
    }

    /// Prepare and write everything, stopping at the first failure
    pub fn generate(&self, request: &GenerationRequest) -> GenerateResult<GenerationPlan> {
        let plan = self.prepare(request)?;

        for artifact in &plan.artifacts {
            self.write(artifact)?;
        }

        info!(
            dto = %request.identity,
            artifacts = plan.artifacts.len(),
            "generation complete"
        );
        Ok(plan)
    }
}
