use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

use anyhow::anyhow;

use crate::{consts::consts::PersonId, model::person::Person};

use super::gateway::{GatewayError, GatewayResult, PersonGateway};

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    people: Vec<Person>,
}

/// In process stand-in for the REST service. Ids are handed out sequentially
/// from 1, unknown ids fail exactly like the real service does.
#[derive(Clone, Debug)]
pub struct MemoryGateway {
    state: Arc<Mutex<MemoryState>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                next_id: 1,
                people: vec![],
            })),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seeds the gateway, each person is assigned the next id
    pub fn with_people(people: Vec<Person>) -> Self {
        let gateway = MemoryGateway::new();

        {
            let mut state = gateway.lock();

            for person in people {
                let id = PersonId(state.next_id);
                state.next_id += 1;
                state.people.push(person.with_id(id));
            }
        }

        gateway
    }

    /// While set every call fails, simulates the service being down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current server side records, bypasses the availability switch
    pub fn snapshot(&self) -> Vec<Person> {
        self.lock().people.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock cannot leave the vec half written
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn check_available(&self) -> GatewayResult<()> {
        match self.unavailable.load(Ordering::SeqCst) {
            true => Err(GatewayError::request_failed(anyhow!("service unavailable"))),
            false => Ok(()),
        }
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        MemoryGateway::new()
    }
}

fn not_found(id: PersonId) -> GatewayError {
    GatewayError::request_failed(anyhow!("no person with [id: {}]", id))
}

impl PersonGateway for MemoryGateway {
    async fn list(&self) -> GatewayResult<Vec<Person>> {
        self.check_available()?;

        Ok(self.lock().people.clone())
    }

    async fn fetch(&self, id: PersonId) -> GatewayResult<Person> {
        self.check_available()?;

        self.lock()
            .people
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, person: Person) -> GatewayResult<Person> {
        self.check_available()?;

        let mut state = self.lock();

        let id = PersonId(state.next_id);
        state.next_id += 1;

        let created = person.with_id(id);
        state.people.push(created.clone());

        Ok(created)
    }

    async fn update(&self, id: PersonId, person: Person) -> GatewayResult<Person> {
        self.check_available()?;

        let mut state = self.lock();

        let existing = state
            .people
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found(id))?;

        *existing = person.with_id(id);

        Ok(existing.clone())
    }

    async fn delete(&self, id: PersonId) -> GatewayResult<()> {
        self.check_available()?;

        let mut state = self.lock();

        let before = state.people.len();
        state.people.retain(|p| p.id != Some(id));

        if state.people.len() == before {
            return Err(not_found(id));
        }

        Ok(())
    }
}
