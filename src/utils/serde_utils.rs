/// Used with `skip_serializing_if` so persisted records only contain values which differ from their defaults.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
