use crate::hosting::Hosting::HostDestroyed;
use crate::hosting::HostingError::HostNotFound;
use crate::hosting::{HostId, Hosting, HostingDomain, HostingError};

impl HostingDomain {
    pub fn destroy_host(
        &mut self,
        id: HostId,
    ) -> Result<impl FnOnce() -> Vec<Hosting> + '_, HostingError> {
        let index = self
            .hosts
            .iter()
            .position(|host| host.id == id)
            .ok_or(HostNotFound { id })?;
        let command = move || {
            let host = self.hosts.remove(index);
            vec![HostDestroyed {
                id: host.id,
                unique: host.unique,
            }]
        };
        Ok(command)
    }
}
