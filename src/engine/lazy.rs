use std::sync::Arc;

/// Borrow the value in `slot`, inserting `T::default()` first when it is absent.
///
/// Every optional stage of the analysis pipeline is created through this one helper.
pub(crate) fn materialize<T: Default>(slot: &mut Option<T>) -> &mut T {
    slot.get_or_insert_with(T::default)
}

/// [`materialize`] for a shared sub-tree: the value is unshared (cloned) before it is borrowed
/// mutably, so the previous document keeps its copy.
pub(crate) fn materialize_shared<T: Default + Clone>(slot: &mut Option<Arc<T>>) -> &mut T {
    Arc::make_mut(materialize(slot))
}
