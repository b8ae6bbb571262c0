use crate::hosting::Hosting::HostCreated;
use crate::hosting::{Host, HostId, Hosting, HostingDomain, HostingError, UniqueId};

impl HostingDomain {
    pub fn create_host(
        &mut self,
        name: &str,
        unique: UniqueId,
        position: [f32; 3],
        scale: [f32; 3],
    ) -> Result<(HostId, impl FnOnce() -> Vec<Hosting> + '_), HostingError> {
        if self.find_host(&unique).is_ok() {
            return Err(HostingError::UniqueIdConflict { unique });
        }
        let id = self.hosts_id.introduce().one(HostId);
        let host = Host {
            id,
            name: name.to_string(),
            unique: unique.clone(),
            position,
            scale,
        };
        let command = move || {
            self.hosts_id.register(id.0);
            self.hosts.push(host);
            vec![HostCreated { id, unique }]
        };
        Ok((id, command))
    }
}
