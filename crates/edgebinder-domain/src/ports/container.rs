use std::any::Any;
use std::sync::Arc;

/// Type-erased service stored in a container
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// Hosting service container
///
/// Looks services up by name. Callers downcast the returned instance to the
/// type they expect; a failed downcast means the service has the wrong shape.
pub trait ServiceContainer: Send + Sync {
    /// Whether a service is registered under `name`
    fn has(&self, name: &str) -> bool;

    /// Fetch the service registered under `name`
    fn get(&self, name: &str) -> Option<ServiceInstance>;
}

impl dyn ServiceContainer + '_ {
    /// Fetch a service and downcast it to `T`
    ///
    /// Returns `None` both when the service is absent and when it is not a `T`.
    pub fn get_as<T: Any + Clone>(&self, name: &str) -> Option<T> {
        self.get(name)
            .and_then(|service| service.downcast_ref::<T>().cloned())
    }
}
