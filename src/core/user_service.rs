use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::base_service::BaseService;
use crate::core::persistence::{DirectoryPersistence, Persistence};
use crate::core::validator::validate_email;
use crate::error::{Result, UserServiceError};
use crate::models::{Config, User, UserId};

/// Default maximum number of live users per service
pub const MAX_USERS: usize = 100;

/// Bounded collection of users with sequential id assignment.
///
/// Live records are kept in creation order. Deleting a record shifts the
/// later ones down, and ids are never handed out twice by the same service
/// (only `init` restarts the counter).
///
/// Operations are not gated on [`is_ready`](Self::is_ready); records may be
/// created before `initialize` has run.
pub struct UserService {
    base: BaseService,
    users: Vec<User>,
    capacity: usize,
    next_id: UserId,
    persistence: Box<dyn Persistence>,
}

impl UserService {
    /// Create an empty service holding up to [`MAX_USERS`] users
    pub fn new(config_path: Option<&str>) -> Self {
        Self::with_capacity(config_path, MAX_USERS)
    }

    /// Create an empty service with a fixed capacity
    pub fn with_capacity(config_path: Option<&str>, capacity: usize) -> Self {
        Self {
            base: BaseService::new(config_path),
            users: Vec::with_capacity(capacity),
            capacity,
            next_id: 1,
            persistence: Box::new(DirectoryPersistence),
        }
    }

    /// Create an empty service from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(Some(&config.storage.config_path), config.limits.max_users)
    }

    /// Replace the load/save hooks
    pub fn with_persistence(mut self, persistence: impl Persistence + 'static) -> Self {
        self.persistence = Box::new(persistence);
        self
    }

    /// Reset to an empty, uninitialized service. Capacity is unchanged.
    pub fn init(&mut self, config_path: Option<&str>) {
        self.base.init(config_path);
        self.users.clear();
        self.next_id = 1;
    }

    /// Load any existing data and mark the service ready.
    ///
    /// A missing data file or a failing load leaves the collection as it is;
    /// the service becomes ready either way.
    pub fn initialize(&mut self) {
        let path = self.base.config_path().to_path_buf();

        if File::open(&path).is_ok() {
            match self.persistence.load(&path) {
                Ok(loaded) => self.adopt(loaded),
                Err(e) => warn!("Failed to load user data: {}", e),
            }
        } else {
            info!("No user data at {}, starting with an empty collection", path.display());
        }

        self.base.mark_initialized();
        info!("UserService initialized successfully");
    }

    fn adopt(&mut self, loaded: Vec<User>) {
        let mut seen: HashSet<UserId> = self.users.iter().map(|u| u.id).collect();

        for user in loaded {
            if self.users.len() >= self.capacity {
                warn!("Loaded data exceeds capacity {}, dropping the rest", self.capacity);
                break;
            }
            let after = match user.id.checked_add(1) {
                Some(after) if user.id != 0 && !seen.contains(&user.id) => after,
                _ => {
                    warn!("Skipping loaded user with unusable id {}", user.id);
                    continue;
                }
            };
            seen.insert(user.id);
            if after > self.next_id {
                self.next_id = after;
            }
            self.users.push(user);
        }

        info!("Loaded {} users", self.users.len());
    }

    /// Create a user, reporting why creation was refused
    pub fn try_create_user(&mut self, name: &str, email: &str) -> Result<&User> {
        if self.users.len() >= self.capacity {
            return Err(UserServiceError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if !validate_email(email) {
            return Err(UserServiceError::InvalidEmail(email.to_string()));
        }

        let id = self.next_id;
        let after = id.checked_add(1).ok_or(UserServiceError::IdsExhausted)?;
        self.next_id = after;

        let index = self.users.len();
        self.users.push(User::create(id, Some(name), Some(email)));
        debug!("Created user {} at slot {}", id, index);

        self.persist();
        Ok(&self.users[index])
    }

    /// Create a user, or `None` when it is refused (full, invalid email, ids used up)
    pub fn create_user(&mut self, name: &str, email: &str) -> Option<&User> {
        match self.try_create_user(name, email) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!("User not created: {}", e);
                None
            }
        }
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    /// Copy up to `max` live users in storage order
    pub fn list_users(&self, max: usize) -> Vec<User> {
        self.users.iter().take(max).cloned().collect()
    }

    /// Copy live users into `dest`, returning how many were written
    pub fn copy_users(&self, dest: &mut [User]) -> usize {
        let mut copied = 0;
        for (slot, user) in dest.iter_mut().zip(&self.users) {
            slot.clone_from(user);
            copied += 1;
        }
        copied
    }

    /// All live users in storage order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Update the given fields of a user.
    ///
    /// The email is not re-validated here, unlike on creation.
    pub fn try_update_user(
        &mut self,
        id: UserId,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<&User> {
        let index = self.position(id).ok_or(UserServiceError::NotFound(id))?;

        let user = &mut self.users[index];
        if let Some(name) = name {
            user.set_name(name);
        }
        if let Some(email) = email {
            user.set_email(email);
        }
        debug!("Updated user {}", id);

        self.persist();
        Ok(&self.users[index])
    }

    pub fn update_user(
        &mut self,
        id: UserId,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Option<&User> {
        self.try_update_user(id, name, email).ok()
    }

    /// Remove a user, keeping the remaining ones in order
    pub fn try_delete_user(&mut self, id: UserId) -> Result<User> {
        let index = self.position(id).ok_or(UserServiceError::NotFound(id))?;
        let removed = self.users.remove(index);
        debug!("Deleted user {} from slot {}", id, index);

        self.persist();
        Ok(removed)
    }

    pub fn delete_user(&mut self, id: UserId) -> bool {
        self.try_delete_user(id).is_ok()
    }

    /// Run the save hook now, surfacing its error
    pub fn save(&self) -> Result<()> {
        self.persistence.save(self.base.config_path(), &self.users)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to save user data: {}", e);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.base.is_ready()
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn config_path(&self) -> &Path {
        self.base.config_path()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.users.len() >= self.capacity
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("base", &self.base)
            .field("users", &self.users)
            .field("capacity", &self.capacity)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
