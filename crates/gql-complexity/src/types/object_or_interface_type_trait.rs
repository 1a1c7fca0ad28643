use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Behavior shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType), both of which declare
/// fields and may implement interfaces.
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn field(&self, field_name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(&self, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
