/// Similar to [`Operation`](crate::operation::Operation), except without the
/// corresponding metadata. Useful when representing a group or category of
/// [`Operation`](crate::operation::Operation)s.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}
