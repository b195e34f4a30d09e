use crate::context::{CompileOptions, CompilerContext};
use dtogen_bundle::Container;
use dtogen_parser::{ClassIdentity, PropertyList, PropertySpec};
use serde::Serialize;

pub const FILE_EXTENSION: &str = "php";
pub const ASSEMBLER_SUFFIX: &str = "Assembler";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// The DTO class itself
    Main,
    /// Skeleton converting between a domain object and the DTO
    Assembler,
}

impl ArtifactKind {
    /// Kinds emitted for the given options, main artifact first
    pub fn requested(options: &CompileOptions) -> Vec<ArtifactKind> {
        if options.with_assembler {
            vec![ArtifactKind::Main, ArtifactKind::Assembler]
        } else {
            vec![ArtifactKind::Main]
        }
    }

    /// Class name of this artifact for a DTO class name
    pub fn class_name(&self, dto_class: &str) -> String {
        match self {
            ArtifactKind::Main => dto_class.to_string(),
            ArtifactKind::Assembler => format!("{}{}", dto_class, ASSEMBLER_SUFFIX),
        }
    }

    /// File name of this artifact for a DTO class name
    pub fn file_name(&self, dto_class: &str) -> String {
        format!("{}.{}", self.class_name(dto_class), FILE_EXTENSION)
    }
}

/// One rendered source file, without the file-entry preamble
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: String,
}

/// Render the DTO class and, when requested, its assembler skeleton.
///
/// Pure: the same input always yields byte-identical output.
pub fn render(
    identity: &ClassIdentity,
    container: &Container,
    properties: &PropertyList,
    options: &CompileOptions,
) -> Vec<Artifact> {
    let namespace = namespace_for(identity, container, &options.root_directory);
    let dto_class = identity.class_name();

    ArtifactKind::requested(options)
        .into_iter()
        .map(|kind| {
            let content = match kind {
                ArtifactKind::Main => compile_dto(&namespace, dto_class, properties),
                ArtifactKind::Assembler => {
                    compile_assembler(&namespace, dto_class, &options.assembler_domain_type)
                }
            };
            Artifact {
                kind,
                file_name: kind.file_name(dto_class),
                content,
            }
        })
        .collect()
}

/// `<container prefix>\<root directory>\<directories of the relative name>`
pub fn namespace_for(identity: &ClassIdentity, container: &Container, root_directory: &str) -> String {
    container
        .namespace_segments()
        .chain(
            root_directory
                .split(['/', '\\'])
                .filter(|segment| !segment.is_empty()),
        )
        .chain(identity.directory_segments())
        .collect::<Vec<_>>()
        .join("\\")
}

/// `createdAt` -> `CreatedAt`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn getter_name(property: &str) -> String {
    format!("get{}", capitalize(property))
}

pub fn setter_name(property: &str) -> String {
    format!("set{}", capitalize(property))
}

fn compile_header(namespace: &str, class_name: &str, ctx: &CompilerContext) {
    if !namespace.is_empty() {
        ctx.add_line(&format!("namespace {};", namespace));
        ctx.add("\n");
    }

    ctx.add_doc_block(&[class_name.to_string()]);
    ctx.add_line(&format!("class {}", class_name));
}

/// Compile the DTO class: all fields first, then a getter/setter pair per
/// property, both in list order.
pub fn compile_dto(namespace: &str, class_name: &str, properties: &PropertyList) -> String {
    let ctx = CompilerContext::new();

    compile_header(namespace, class_name, &ctx);
    ctx.open_block();

    for property in properties {
        compile_field(property, &ctx);
    }

    for property in properties {
        compile_getter(property, &ctx);
        compile_setter(property, class_name, &ctx);
    }

    ctx.close_block();
    ctx.get_output()
}

fn compile_field(property: &PropertySpec, ctx: &CompilerContext) {
    ctx.begin_member();
    ctx.add_doc_block(&[format!("@var {}", property.type_)]);
    ctx.add_line(&format!("private ${};", property.name));
}

fn compile_getter(property: &PropertySpec, ctx: &CompilerContext) {
    ctx.begin_member();
    ctx.add_doc_block(&[
        format!("Get {}", property.name),
        String::new(),
        format!("@return {}", property.type_),
    ]);
    ctx.add_line(&format!("public function {}()", getter_name(&property.name)));
    ctx.open_block();
    ctx.add_line(&format!("return $this->{};", property.name));
    ctx.close_block();
}

// Setters always hand back the receiver so calls can be chained
fn compile_setter(property: &PropertySpec, class_name: &str, ctx: &CompilerContext) {
    ctx.begin_member();
    ctx.add_doc_block(&[
        format!("Set {}", property.name),
        String::new(),
        format!("@param {} ${}", property.type_, property.name),
        format!("@return {}", class_name),
    ]);
    ctx.add_line(&format!(
        "public function {}(${})",
        setter_name(&property.name),
        property.name
    ));
    ctx.open_block();
    ctx.add_line(&format!("$this->{} = ${};", property.name, property.name));
    ctx.add_line("");
    ctx.add_line("return $this;");
    ctx.close_block();
}

/// Compile the assembler skeleton with placeholder conversions in both
/// directions.
pub fn compile_assembler(namespace: &str, dto_class: &str, domain_type: &str) -> String {
    let ctx = CompilerContext::new();
    let class_name = ArtifactKind::Assembler.class_name(dto_class);

    compile_header(namespace, &class_name, &ctx);
    ctx.open_block();

    ctx.begin_member();
    ctx.add_doc_block(&[
        format!("Converts a domain object into a {}", dto_class),
        String::new(),
        format!("@param {} $domain", domain_type),
        format!("@return {}", dto_class),
    ]);
    ctx.add_line("public function toDTO($domain)");
    ctx.open_block();
    ctx.add_line(&format!("$dto = new {}();", dto_class));
    ctx.add_line("");
    ctx.add_line("return $dto;");
    ctx.close_block();

    ctx.begin_member();
    ctx.add_doc_block(&[
        format!("Converts a {} into a domain object", dto_class),
        String::new(),
        format!("@param {} $dto", dto_class),
        format!("@return {}", domain_type),
    ]);
    ctx.add_line(&format!("public function fromDTO({} $dto)", dto_class));
    ctx.open_block();
    ctx.add_line("return null;");
    ctx.close_block();

    ctx.close_block();
    ctx.get_output()
}
