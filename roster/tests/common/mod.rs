use std::{net::SocketAddr, sync::Mutex};

use actix_web::{
    dev::ServerHandle,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use roster::{consts::consts::PersonId, model::person::Person};

pub const PEOPLE_PATH: &str = "/PersonREST/api/people";

/// In memory stand-in for the person REST service, answers 404 for unknown ids
pub struct FakeStore {
    next_id: i64,
    people: Vec<Person>,
}

impl FakeStore {
    pub fn new(people: Vec<Person>) -> Self {
        let mut store = FakeStore {
            next_id: 1,
            people: vec![],
        };

        for person in people {
            store.insert(person);
        }

        store
    }

    fn insert(&mut self, person: Person) -> Person {
        let created = person.with_id(PersonId(self.next_id));
        self.next_id += 1;
        self.people.push(created.clone());
        created
    }
}

type Store = Data<Mutex<FakeStore>>;

async fn list(store: Store) -> impl Responder {
    let store = store.lock().unwrap();
    HttpResponse::Ok().json(&store.people)
}

async fn get(store: Store, id: web::Path<i64>) -> impl Responder {
    let store = store.lock().unwrap();

    match store.people.iter().find(|p| p.id == Some(PersonId(*id))) {
        Some(person) => HttpResponse::Ok().json(person),
        None => HttpResponse::NotFound().finish(),
    }
}

async fn create(store: Store, person: web::Json<Person>) -> impl Responder {
    let mut store = store.lock().unwrap();
    let created = store.insert(person.into_inner().without_id());
    HttpResponse::Ok().json(created)
}

async fn update(store: Store, id: web::Path<i64>, person: web::Json<Person>) -> impl Responder {
    let mut store = store.lock().unwrap();
    let id = PersonId(*id);

    match store.people.iter_mut().find(|p| p.id == Some(id)) {
        Some(existing) => {
            *existing = person.into_inner().with_id(id);
            HttpResponse::Ok().json(existing.clone())
        }
        // Mirrors the service returning an empty body for unknown ids
        None => HttpResponse::NoContent().finish(),
    }
}

async fn delete(store: Store, id: web::Path<i64>) -> impl Responder {
    let mut store = store.lock().unwrap();
    let before = store.people.len();

    store.people.retain(|p| p.id != Some(PersonId(*id)));

    match store.people.len() == before {
        true => HttpResponse::NotFound().finish(),
        false => HttpResponse::Ok().body("Deleted"),
    }
}

async fn broken() -> impl Responder {
    HttpResponse::InternalServerError().body("boom")
}

pub struct FakeServer {
    pub addr: SocketAddr,
    pub store: Store,
    handle: ServerHandle,
}

impl FakeServer {
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, PEOPLE_PATH)
    }

    /// Base whose every route answers 500
    pub fn broken_base_url(&self) -> String {
        format!("http://{}/broken", self.addr)
    }

    pub fn people(&self) -> Vec<Person> {
        self.store.lock().unwrap().people.clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Binds to an ephemeral port and serves from the current actix runtime
pub fn start(people: Vec<Person>) -> FakeServer {
    let store: Store = Data::new(Mutex::new(FakeStore::new(people)));
    let app_store = store.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_store.clone())
            .service(
                web::scope(PEOPLE_PATH)
                    .route("", web::get().to(list))
                    .route("", web::post().to(create))
                    .route("/{id}", web::get().to(get))
                    .route("/{id}", web::put().to(update))
                    .route("/{id}", web::delete().to(delete)),
            )
            .default_service(web::to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("should bind to an ephemeral port");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();

    actix_web::rt::spawn(server);

    FakeServer {
        addr,
        store,
        handle,
    }
}
