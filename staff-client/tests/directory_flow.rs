// staff-client/tests/directory_flow.rs
// 端到端：真实 staff-server (内存存储) + HttpClient + DirectoryApp

use staff_client::app::{ERR_ADD, ERR_UPDATE};
use staff_client::{
    ClientConfig, ClientError, Command, DirectoryApp, EmployeeCreate, EmployeeService, HttpClient,
    ViewMode,
};
use staff_server::ServerState;
use staff_server::core::serve;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    client: HttpClient,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            serve(listener, ServerState::in_memory(), async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        let config = ClientConfig::new(format!("http://{addr}")).with_timeout(5);
        Self {
            client: HttpClient::new(&config).unwrap(),
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

fn ann() -> EmployeeCreate {
    EmployeeCreate {
        employee_id: "E1".to_string(),
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        email: "a@x.com".to_string(),
        phone_number: "555".to_string(),
        employee_position: "Eng".to_string(),
        image: None,
    }
}

#[tokio::test]
async fn test_http_client_round_trip() {
    let server = TestServer::start().await;
    let client = &server.client;

    let created = client.create_employee(&ann()).await.unwrap();
    assert_eq!(created.message, "Employee added successfully");

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, created.id);

    let err = client.create_employee(&ann()).await.unwrap_err();
    match err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Employee ID already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let deleted = client.delete_employee(&created.id).await.unwrap();
    assert_eq!(deleted.message, "Employee deleted successfully");
    assert!(client.list_employees().await.unwrap().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_directory_scenario() {
    let server = TestServer::start().await;
    let service = &server.client;
    let mut app = DirectoryApp::new();

    app.dispatch(Command::Refresh, service).await;
    assert!(app.employees.is_empty());
    assert!(app.error.is_none());

    // Create
    let draft = ann();
    app.new_draft.employee_id = draft.employee_id;
    app.new_draft.name = draft.name;
    app.new_draft.surname = draft.surname;
    app.new_draft.email = draft.email;
    app.new_draft.phone_number = draft.phone_number;
    app.new_draft.employee_position = draft.employee_position;
    app.dispatch(Command::SubmitNew, service).await;
    assert!(app.error.is_none());
    assert_eq!(app.employees.len(), 1);
    assert_eq!(app.employees[0].name, "Ann");
    assert!(app.new_draft.name.is_empty());

    // Edit
    app.begin_edit();
    assert_eq!(app.view, ViewMode::Edit);
    if let Some(edit) = app.edit.as_mut() {
        edit.draft.name = "Anna".to_string();
    }
    app.dispatch(Command::SubmitEdit, service).await;
    assert_eq!(app.view, ViewMode::List);
    assert_eq!(app.employees[0].name, "Anna");
    assert_eq!(app.employees[0].employee_id, "E1");

    // Delete
    let id = app.employees[0].id.clone();
    app.dispatch(Command::Delete(id.clone()), service).await;
    assert!(!app.employees.iter().any(|e| e.id == id));
    assert!(app.error.is_none());

    server.stop().await;
}

#[tokio::test]
async fn test_server_rejections_surface_as_generic_errors() {
    let server = TestServer::start().await;
    let service = &server.client;
    let mut app = DirectoryApp::new();

    // Missing fields
    app.new_draft.employee_id = "E1".to_string();
    app.dispatch(Command::SubmitNew, service).await;
    assert_eq!(app.error.as_deref(), Some(ERR_ADD));
    assert_eq!(app.new_draft.employee_id, "E1");

    // Blank required field on edit keeps the edit form open
    app.clear_error();
    let created = service.create_employee(&ann()).await.unwrap();
    app.dispatch(Command::Refresh, service).await;
    app.begin_edit();
    if let Some(edit) = app.edit.as_mut() {
        assert_eq!(edit.id, created.id);
        edit.draft.surname.clear();
    }
    app.dispatch(Command::SubmitEdit, service).await;
    assert_eq!(app.error.as_deref(), Some(ERR_UPDATE));
    assert_eq!(app.view, ViewMode::Edit);

    server.stop().await;
}
