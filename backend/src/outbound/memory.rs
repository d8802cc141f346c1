//! In-memory implementation of every repository port.
//!
//! Used when `DATABASE_URL` is absent and by the test suites. Each entity
//! lives in its own map behind an async lock; ids and timestamps are
//! assigned here, matching what the SQL adapters get from the database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    CustomerRepository, InventoryRepository, ProjectRepository, QuoteRepository, RepositoryError,
    SubsidyRepository, UserRepository,
};
use crate::domain::{
    Customer, CustomerPatch, InventoryItem, InventoryPatch, NewCustomer, NewInventoryItem,
    NewProject, NewQuote, NewSubsidy, NewUser, Project, ProjectPatch, Quote, QuotePatch, Subsidy,
    SubsidyPatch, User,
};

/// Process-local store backing all six ports.
#[derive(Default)]
pub struct InMemoryStore {
    customers: RwLock<HashMap<Uuid, Customer>>,
    quotes: RwLock<HashMap<Uuid, Quote>>,
    subsidies: RwLock<HashMap<Uuid, Subsidy>>,
    projects: RwLock<HashMap<Uuid, Project>>,
    inventory: RwLock<HashMap<Uuid, InventoryItem>>,
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            name: new.name,
            contact: new.contact,
            energy_needs: new.energy_needs,
            customer_type: new.customer_type,
            created_at: now,
            updated_at: now,
        };
        self.customers
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, RepositoryError> {
        let mut customers = self.customers.write().await;
        Ok(customers.get_mut(&id).map(|customer| {
            patch.apply(customer);
            customer.updated_at = Utc::now();
            customer.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        // Mirrors the FK RESTRICT the SQL schema puts on quotes and projects.
        if self
            .quotes
            .read()
            .await
            .values()
            .any(|quote| quote.customer_id == id)
            || self
                .projects
                .read()
                .await
                .values()
                .any(|project| project.customer_id == id)
        {
            return Err(RepositoryError::conflict(
                "customer is referenced by quotes or projects",
            ));
        }
        Ok(self.customers.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl QuoteRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Quote>, RepositoryError> {
        Ok(self.quotes.read().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Quote>, RepositoryError> {
        Ok(self.quotes.read().await.get(&id).cloned())
    }

    async fn insert(&self, new: NewQuote) -> Result<Quote, RepositoryError> {
        let now = Utc::now();
        let quote = Quote {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            system_size: new.system_size,
            cost: new.cost,
            subsidy_applied: new.subsidy_applied,
            created_at: now,
            updated_at: now,
        };
        self.quotes.write().await.insert(quote.id, quote.clone());
        Ok(quote)
    }

    async fn update(&self, id: Uuid, patch: QuotePatch) -> Result<Option<Quote>, RepositoryError> {
        let mut quotes = self.quotes.write().await;
        Ok(quotes.get_mut(&id).map(|quote| {
            patch.apply(quote);
            quote.updated_at = Utc::now();
            quote.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.quotes.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl SubsidyRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Subsidy>, RepositoryError> {
        Ok(self.subsidies.read().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Subsidy>, RepositoryError> {
        Ok(self.subsidies.read().await.get(&id).cloned())
    }

    async fn insert(&self, new: NewSubsidy) -> Result<Subsidy, RepositoryError> {
        let now = Utc::now();
        let subsidy = Subsidy {
            id: Uuid::new_v4(),
            name: new.name,
            eligibility_criteria: new.eligibility_criteria,
            amount: new.amount,
            created_at: now,
            updated_at: now,
        };
        self.subsidies
            .write()
            .await
            .insert(subsidy.id, subsidy.clone());
        Ok(subsidy)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: SubsidyPatch,
    ) -> Result<Option<Subsidy>, RepositoryError> {
        let mut subsidies = self.subsidies.write().await;
        Ok(subsidies.get_mut(&id).map(|subsidy| {
            patch.apply(subsidy);
            subsidy.updated_at = Utc::now();
            subsidy.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.subsidies.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.projects.read().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn insert(&self, new: NewProject) -> Result<Project, RepositoryError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            status: new.status,
            milestones: new.milestones,
            created_at: now,
            updated_at: now,
        };
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, RepositoryError> {
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            patch.apply(project);
            project.updated_at = Utc::now();
            project.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.projects.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self.inventory.read().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self.inventory.read().await.get(&id).cloned())
    }

    async fn insert(&self, new: NewInventoryItem) -> Result<InventoryItem, RepositoryError> {
        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            item_name: new.item_name,
            stock_level: new.stock_level,
            threshold: new.threshold,
            created_at: now,
            updated_at: now,
        };
        self.inventory.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: InventoryPatch,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let mut inventory = self.inventory.write().await;
        Ok(inventory.get_mut(&id).map(|item| {
            patch.apply(item);
            item.updated_at = Utc::now();
            item.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.inventory.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == new.email) {
            return Err(RepositoryError::conflict("duplicate email"));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new.email,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }
}
