use serde::Serialize;

/// A stored resource addressable by a string id.
///
/// Collections, the resource locator stage, and the route-id check are all
/// generic over this trait, so each resource kind only has to say how it is
/// named in messages.
pub trait Resource: Clone + Serialize + Send + Sync {
    /// Resource name used at the start of user-facing messages ("Dish").
    const KIND: &'static str;

    /// The resource's identifier.
    fn id(&self) -> &str;

    /// Message reported when no resource with `id` exists.
    fn not_found_message(id: &str) -> String;

    /// Message reported when a body id disagrees with the route id.
    fn id_mismatch_message(body_id: &str, route_id: &str) -> String {
        format!(
            "{kind} id does not match route id. {kind}: {body_id}, Route: {route_id}",
            kind = Self::KIND
        )
    }
}
