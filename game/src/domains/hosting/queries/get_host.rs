use crate::hosting::{Host, HostId, HostingDomain, HostingError, UniqueId};

impl HostingDomain {
    pub fn get_host(&self, id: HostId) -> Result<&Host, HostingError> {
        self.hosts
            .iter()
            .find(|host| host.id == id)
            .ok_or(HostingError::HostNotFound { id })
    }

    pub fn find_host(&self, unique: &UniqueId) -> Result<&Host, HostingError> {
        self.hosts
            .iter()
            .find(|host| &host.unique == unique)
            .ok_or(HostingError::HostNotFoundByUnique {
                unique: unique.clone(),
            })
    }
}
