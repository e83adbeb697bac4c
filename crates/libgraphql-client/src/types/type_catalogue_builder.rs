use crate::file_reader;
use crate::loc;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeCatalogue;
use crate::types::UnionType;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeCatalogueBuildError>;

/// Utility for assembling a [`TypeCatalogue`], either from explicit type
/// records or from GraphQL SDL.
///
/// Only the parts of a schema needed to resolve response discriminators
/// and type conditions are retained: object types along with the interfaces
/// they implement, interface names, and union memberships. Fields,
/// directives, and other type kinds are read but otherwise ignored.
#[derive(Debug, Default)]
pub struct TypeCatalogueBuilder {
    pending_extensions: Vec<PendingExtension>,
    str_load_counter: u16,
    types: IndexMap<String, TypeDraft>,
}
impl TypeCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interface_type(mut self, type_: InterfaceType) -> Result<Self> {
        self.add_new_type(
            type_.name,
            loc::TypeDefLocation::Programmatic,
            TypeDraft::Interface(loc::TypeDefLocation::Programmatic),
        )?;
        Ok(self)
    }

    /// Add an [`ObjectType`] record. Each of its implemented interfaces must
    /// also be added (in any order) before [`TypeCatalogueBuilder::build()`]
    /// is called.
    pub fn add_object_type(mut self, type_: ObjectType) -> Result<Self> {
        let mut draft = ObjectTypeDraft::new(loc::TypeDefLocation::Programmatic);
        for interface_type in type_.implemented_interfaces {
            draft.add_interface_name(
                type_.typename.as_str(),
                interface_type.name,
                loc::TypeDefLocation::Programmatic,
            )?;
        }
        self.add_new_type(
            type_.typename,
            loc::TypeDefLocation::Programmatic,
            TypeDraft::Object(draft),
        )?;
        Ok(self)
    }

    /// Add a [`UnionType`] record. Only the typenames of its possible types
    /// are retained; the member records in the built catalogue are the
    /// [`ObjectType`]s registered under those names.
    pub fn add_union_type(mut self, type_: UnionType) -> Result<Self> {
        let mut draft = UnionTypeDraft::new(loc::TypeDefLocation::Programmatic);
        for member_type in type_.possible_types {
            draft.add_member_name(
                type_.name.as_str(),
                member_type.typename,
                loc::TypeDefLocation::Programmatic,
            )?;
        }
        self.add_new_type(
            type_.name,
            loc::TypeDefLocation::Programmatic,
            TypeDraft::Union(draft),
        )?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<TypeCatalogue> {
        for ext in std::mem::take(&mut self.pending_extensions) {
            self.merge_extension(ext, /* defer_if_undefined = */ false)?;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            return Err(TypeCatalogueBuildError::TypeValidationErrors { errors });
        }

        let mut interface_types = IndexMap::new();
        for (type_name, draft) in &self.types {
            if let TypeDraft::Interface(_) = draft {
                interface_types.insert(
                    type_name.to_string(),
                    InterfaceType::new(type_name.as_str()),
                );
            }
        }

        let mut object_types = IndexMap::new();
        for (type_name, draft) in &self.types {
            if let TypeDraft::Object(draft) = draft {
                object_types.insert(type_name.to_string(), ObjectType::new(
                    type_name.as_str(),
                    draft.interface_names
                        .keys()
                        .map(|iface_name| InterfaceType::new(iface_name.as_str())),
                ));
            }
        }

        let mut union_types = IndexMap::new();
        for (type_name, draft) in &self.types {
            if let TypeDraft::Union(draft) = draft {
                union_types.insert(type_name.to_string(), UnionType::new(
                    type_name.as_str(),
                    draft.member_names
                        .keys()
                        .filter_map(|member_name| object_types.get(member_name))
                        .cloned(),
                ));
            }
        }

        Ok(TypeCatalogue {
            interface_types,
            object_types,
            union_types,
        })
    }

    /// Read and load a single GraphQL SDL file. See
    /// [`TypeCatalogueBuilder::load_str()`].
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    /// Read and load each of the given GraphQL SDL files, in order.
    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = file_reader::read_content(file_path)
                .map_err(|err| TypeCatalogueBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path.to_path_buf()), &content)?;
        }
        Ok(self)
    }

    /// Parse the given GraphQL SDL and add every type it defines or extends.
    ///
    /// `file_path` is only used to attribute locations in errors; when absent,
    /// a synthetic `str://N` path is used.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::parse_schema::<String>(content)
                .map_err(|err| TypeCatalogueBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn add_new_type(
        &mut self,
        type_name: String,
        def_location: loc::TypeDefLocation,
        draft: TypeDraft,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(TypeCatalogueBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name,
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            return Err(TypeCatalogueBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().to_owned(),
                def2: def_location,
                type_name,
            });
        }

        self.types.insert(type_name, draft);
        Ok(())
    }

    fn merge_extension(
        &mut self,
        ext: PendingExtension,
        defer_if_undefined: bool,
    ) -> Result<()> {
        let Some(draft) = self.types.get_mut(ext.type_name.as_str()) else {
            if defer_if_undefined {
                self.pending_extensions.push(ext);
                return Ok(());
            }
            return Err(TypeCatalogueBuildError::ExtensionOfUndefinedType {
                extension_location: ext.location,
                type_name: ext.type_name,
            });
        };

        match (draft, ext.kind) {
            (TypeDraft::Interface(_), PendingExtensionKind::Interface) => Ok(()),

            (
                TypeDraft::Object(draft),
                PendingExtensionKind::Object { interface_names },
            ) => {
                for iface_name in interface_names {
                    draft.add_interface_name(
                        ext.type_name.as_str(),
                        iface_name,
                        ext.location.to_owned(),
                    )?;
                }
                Ok(())
            },

            (
                TypeDraft::Union(draft),
                PendingExtensionKind::Union { member_names },
            ) => {
                for member_name in member_names {
                    draft.add_member_name(
                        ext.type_name.as_str(),
                        member_name,
                        ext.location.to_owned(),
                    )?;
                }
                Ok(())
            },

            (draft, ext_kind) => Err(TypeCatalogueBuildError::InvalidExtensionType {
                extension_kind: ext_kind.name().to_string(),
                extension_location: ext.location,
                type_kind: draft.kind_name().to_string(),
                type_name: ext.type_name,
            }),
        }
    }

    fn validate(&self) -> Vec<TypeCatalogueBuildError> {
        let mut errors = vec![];
        for (type_name, draft) in &self.types {
            match draft {
                TypeDraft::Object(draft) => {
                    for (iface_name, ref_location) in &draft.interface_names {
                        match self.types.get(iface_name.as_str()) {
                            Some(TypeDraft::Interface(_)) => (),

                            Some(non_iface_type) => errors.push(
                                TypeCatalogueBuildError::ImplementsNonInterfaceType {
                                    implemented_type_kind:
                                        non_iface_type.kind_name().to_string(),
                                    implemented_type_name: iface_name.to_string(),
                                    ref_location: ref_location.to_owned(),
                                    type_name: type_name.to_string(),
                                }
                            ),

                            None => errors.push(
                                TypeCatalogueBuildError::UndefinedInterface {
                                    interface_name: iface_name.to_string(),
                                    ref_location: ref_location.to_owned(),
                                    type_name: type_name.to_string(),
                                }
                            ),
                        }
                    }
                },

                // Member types of a union type can only be object types.
                // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
                TypeDraft::Union(draft) => {
                    for (member_name, ref_location) in &draft.member_names {
                        match self.types.get(member_name.as_str()) {
                            Some(TypeDraft::Object(_)) => (),

                            Some(non_object_type) => errors.push(
                                TypeCatalogueBuildError::InvalidUnionMemberKind {
                                    member_type_kind:
                                        non_object_type.kind_name().to_string(),
                                    member_type_name: member_name.to_string(),
                                    ref_location: ref_location.to_owned(),
                                    union_type_name: type_name.to_string(),
                                }
                            ),

                            None => errors.push(
                                TypeCatalogueBuildError::UndefinedUnionMember {
                                    member_type_name: member_name.to_string(),
                                    ref_location: ref_location.to_owned(),
                                    union_type_name: type_name.to_string(),
                                }
                            ),
                        }
                    }
                },

                TypeDraft::Interface(_) | TypeDraft::Other { .. } => (),
            }
        }
        errors
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::Definition<'static, String>,
    ) -> Result<()> {
        match def {
            ast::Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            ast::Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            ast::Definition::DirectiveDefinition(_)
                | ast::Definition::SchemaDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        use ast::TypeDefinition;
        match def {
            TypeDefinition::Interface(iface_def) => {
                let def_location = schema_location(file_path, iface_def.position);
                self.add_new_type(
                    iface_def.name,
                    def_location.to_owned(),
                    TypeDraft::Interface(def_location),
                )
            },

            TypeDefinition::Object(obj_def) => {
                let def_location = schema_location(file_path, obj_def.position);
                let mut draft = ObjectTypeDraft::new(def_location.to_owned());
                for iface_name in obj_def.implements_interfaces {
                    draft.add_interface_name(
                        obj_def.name.as_str(),
                        iface_name,
                        def_location.to_owned(),
                    )?;
                }
                self.add_new_type(obj_def.name, def_location, TypeDraft::Object(draft))
            },

            TypeDefinition::Union(union_def) => {
                let def_location = schema_location(file_path, union_def.position);
                let mut draft = UnionTypeDraft::new(def_location.to_owned());
                for member_name in union_def.types {
                    draft.add_member_name(
                        union_def.name.as_str(),
                        member_name,
                        def_location.to_owned(),
                    )?;
                }
                self.add_new_type(union_def.name, def_location, TypeDraft::Union(draft))
            },

            TypeDefinition::Enum(def) => self.add_other_type(
                def.name,
                "enum",
                schema_location(file_path, def.position),
            ),

            TypeDefinition::InputObject(def) => self.add_other_type(
                def.name,
                "input object",
                schema_location(file_path, def.position),
            ),

            TypeDefinition::Scalar(def) => self.add_other_type(
                def.name,
                "scalar",
                schema_location(file_path, def.position),
            ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::TypeExtension<'static, String>,
    ) -> Result<()> {
        use ast::TypeExtension;
        let ext = match ext {
            TypeExtension::Interface(iface_ext) => PendingExtension {
                kind: PendingExtensionKind::Interface,
                location: schema_location(file_path, iface_ext.position),
                type_name: iface_ext.name,
            },

            TypeExtension::Object(obj_ext) => PendingExtension {
                kind: PendingExtensionKind::Object {
                    interface_names: obj_ext.implements_interfaces,
                },
                location: schema_location(file_path, obj_ext.position),
                type_name: obj_ext.name,
            },

            TypeExtension::Union(union_ext) => PendingExtension {
                kind: PendingExtensionKind::Union {
                    member_names: union_ext.types,
                },
                location: schema_location(file_path, union_ext.position),
                type_name: union_ext.name,
            },

            TypeExtension::Enum(_)
                | TypeExtension::InputObject(_)
                | TypeExtension::Scalar(_) => return Ok(()),
        };

        self.merge_extension(ext, /* defer_if_undefined = */ true)
    }

    fn add_other_type(
        &mut self,
        type_name: String,
        kind_name: &'static str,
        def_location: loc::TypeDefLocation,
    ) -> Result<()> {
        self.add_new_type(
            type_name,
            def_location.to_owned(),
            TypeDraft::Other { def_location, kind_name },
        )
    }
}

fn schema_location(
    file_path: &Path,
    pos: graphql_parser::Pos,
) -> loc::TypeDefLocation {
    loc::FilePosition::from_pos(file_path, pos).into()
}

#[derive(Debug)]
enum TypeDraft {
    Interface(loc::TypeDefLocation),
    Object(ObjectTypeDraft),
    Other {
        def_location: loc::TypeDefLocation,
        kind_name: &'static str,
    },
    Union(UnionTypeDraft),
}
impl TypeDraft {
    fn def_location(&self) -> &loc::TypeDefLocation {
        match self {
            Self::Interface(def_location) => def_location,
            Self::Object(draft) => &draft.def_location,
            Self::Other { def_location, .. } => def_location,
            Self::Union(draft) => &draft.def_location,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Interface(_) => "interface",
            Self::Object(_) => "object",
            Self::Other { kind_name, .. } => kind_name,
            Self::Union(_) => "union",
        }
    }
}

#[derive(Debug)]
struct ObjectTypeDraft {
    def_location: loc::TypeDefLocation,
    interface_names: IndexMap<String, loc::TypeDefLocation>,
}
impl ObjectTypeDraft {
    fn new(def_location: loc::TypeDefLocation) -> Self {
        Self {
            def_location,
            interface_names: IndexMap::new(),
        }
    }

    fn add_interface_name(
        &mut self,
        type_name: &str,
        iface_name: String,
        ref_location: loc::TypeDefLocation,
    ) -> Result<()> {
        if self.interface_names.contains_key(iface_name.as_str()) {
            return Err(TypeCatalogueBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: ref_location,
                duplicated_interface_name: iface_name,
                type_name: type_name.to_string(),
            });
        }
        self.interface_names.insert(iface_name, ref_location);
        Ok(())
    }
}

#[derive(Debug)]
struct UnionTypeDraft {
    def_location: loc::TypeDefLocation,
    member_names: IndexMap<String, loc::TypeDefLocation>,
}
impl UnionTypeDraft {
    fn new(def_location: loc::TypeDefLocation) -> Self {
        Self {
            def_location,
            member_names: IndexMap::new(),
        }
    }

    fn add_member_name(
        &mut self,
        union_type_name: &str,
        member_name: String,
        ref_location: loc::TypeDefLocation,
    ) -> Result<()> {
        if let Some(existing_location) = self.member_names.get(member_name.as_str()) {
            return Err(TypeCatalogueBuildError::DuplicateUnionMember {
                member1: existing_location.to_owned(),
                member2: ref_location,
                member_type_name: member_name,
                union_type_name: union_type_name.to_string(),
            });
        }
        self.member_names.insert(member_name, ref_location);
        Ok(())
    }
}

#[derive(Debug)]
struct PendingExtension {
    kind: PendingExtensionKind,
    location: loc::TypeDefLocation,
    type_name: String,
}

#[derive(Debug)]
enum PendingExtensionKind {
    Interface,
    Object {
        interface_names: Vec<String>,
    },
    Union {
        member_names: Vec<String>,
    },
}
impl PendingExtensionKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Object { .. } => "object",
            Self::Union { .. } => "union",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TypeCatalogueBuildError {
    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::TypeDefLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple types were defined with the name `{type_name}` ({def1} and {def2})")]
    DuplicateTypeDefinition {
        def1: loc::TypeDefLocation,
        def2: loc::TypeDefLocation,
        type_name: String,
    },

    #[error("The `{member_type_name}` type is listed more than once as a member of the `{union_type_name}` union")]
    DuplicateUnionMember {
        member1: loc::TypeDefLocation,
        member2: loc::TypeDefLocation,
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, but no such type is defined ({extension_location})")]
    ExtensionOfUndefinedType {
        extension_location: loc::TypeDefLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is declared to implement `{implemented_type_name}`, \
        which is a `{implemented_type_kind}` type rather than an interface"
    )]
    ImplementsNonInterfaceType {
        implemented_type_kind: String,
        implemented_type_name: String,
        ref_location: loc::TypeDefLocation,
        type_name: String,
    },

    #[error("Type names may not start with `__`: `{type_name}` ({def_location})")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::TypeDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to apply a `{extension_kind}` type extension to the \
        `{type_name}` type, which is a `{type_kind}` type ({extension_location})"
    )]
    InvalidExtensionType {
        extension_kind: String,
        extension_location: loc::TypeDefLocation,
        type_kind: String,
        type_name: String,
    },

    #[error(
        "The `{union_type_name}` union lists `{member_type_name}` as a member, \
        but it is a `{member_type_kind}` type. Union members must be object types"
    )]
    InvalidUnionMemberKind {
        member_type_kind: String,
        member_type_name: String,
        ref_location: loc::TypeDefLocation,
        union_type_name: String,
    },

    #[error("Error parsing schema document {}: {err}", .file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Error reading schema file: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("Type validation errors: {errors:#?}")]
    TypeValidationErrors {
        errors: Vec<TypeCatalogueBuildError>,
    },

    #[error(
        "The `{type_name}` type is declared to implement `{interface_name}`, \
        but no such interface is defined"
    )]
    UndefinedInterface {
        interface_name: String,
        ref_location: loc::TypeDefLocation,
        type_name: String,
    },

    #[error(
        "The `{union_type_name}` union lists `{member_type_name}` as a member, \
        but no such type is defined"
    )]
    UndefinedUnionMember {
        member_type_name: String,
        ref_location: loc::TypeDefLocation,
        union_type_name: String,
    },
}
