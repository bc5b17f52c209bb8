use crate::EndpointRoutePattern;

/// A generated domain context: a typed view over the entity sets a domain service exposes.
///
/// Implemented by the `#[domain_context]` attribute from `riagen-derive`.
pub trait DomainContext {
    /// The dotted, fully-qualified name of the domain service.
    const SERVICE_NAME: &'static str;

    /// How endpoint routes of the service are laid out.
    const ROUTE_PATTERN: EndpointRoutePattern;

    /// The pluralized entity set names, in declaration order.
    const ENTITY_SETS: &'static [&'static str];

    /// The route of the `Get<set>` query for the given entity set.
    fn query_route(set: &str) -> String {
        Self::ROUTE_PATTERN.route(Self::SERVICE_NAME, &format!("Get{set}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inventory;

    impl DomainContext for Inventory {
        const SERVICE_NAME: &'static str = "Shop.InventoryService";
        const ROUTE_PATTERN: EndpointRoutePattern = EndpointRoutePattern::Name;
        const ENTITY_SETS: &'static [&'static str] = &["Boxes"];
    }

    #[test]
    fn test_query_route() {
        assert_eq!(Inventory::query_route("Boxes"), "InventoryService/GetBoxes");
    }
}
