use crate::loc;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
    pub(crate) typename_field: Field,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(name: &str, def_location: loc::SourceLocation) -> Self {
        Self {
            def_location,
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_string(),
            typename_field: Field::typename_meta_field(name),
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        if field_name == self.typename_field.name() {
            Some(&self.typename_field)
        } else {
            self.fields.get(field_name)
        }
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
