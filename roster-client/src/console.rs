//! Console state container
//!
//! Holds the client-side view of the employee collection and drives the
//! interaction cycle a front-end renders from:
//!
//! - `Loading`: initial state while the first fetch is in flight
//! - `Ready`: collection visible; search, edit, and delete available
//! - `Editing`: create or edit form open
//!
//! Mutations are merged optimistically: local state is patched from the
//! submitted form (or the returned record on create) instead of re-fetching
//! the collection. This saves a round trip but can drift from server truth
//! if the server ever transforms fields.

use crate::{ClientResult, HttpClient};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// One generic banner message per action class; details go to the logs.
const FETCH_FAILED: &str = "Failed to fetch employees. Please check if the API is running.";
const SAVE_FAILED: &str = "Failed to save employee. Please try again.";
const DELETE_FAILED: &str = "Failed to delete employee. Please try again.";

/// Which screen the console is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Initial full-page loading state
    Loading,
    /// Collection visible and interactive
    Ready,
    /// Form open; `target` is `None` for a new employee
    Editing { target: Option<i64> },
}

/// Form values as the user typed them
///
/// `salary` stays a string until submit so partial input never panics.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: String,
}

impl EmployeeForm {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            salary: employee.salary.to_string(),
        }
    }

    /// Pre-flight validation: name present, email present and plausible,
    /// salary a non-negative number. Runs before any request is attempted.
    pub fn to_payload(&self) -> Result<EmployeeCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        let salary: f64 = self
            .salary
            .trim()
            .parse()
            .map_err(|_| "Salary must be a number".to_string())?;
        if !salary.is_finite() || salary < 0.0 {
            return Err("Salary must be a non-negative number".to_string());
        }

        let phone = self.phone.trim();
        Ok(EmployeeCreate {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            salary,
        })
    }
}

/// Render helper: absent or empty phone shows as "N/A"
pub fn phone_display(employee: &Employee) -> &str {
    employee
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("N/A")
}

/// Client-side state container for the employee console
pub struct Console {
    client: HttpClient,
    view: View,
    employees: Vec<Employee>,
    search_term: String,
    error: Option<String>,
    form: EmployeeForm,
}

impl Console {
    /// Create a console in the initial loading state
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            view: View::Loading,
            employees: Vec::new(),
            search_term: String::new(),
            error: None,
            form: EmployeeForm::default(),
        }
    }

    // ==================== Accessors ====================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    // ==================== Fetch ====================

    /// Fetch the collection from the server
    ///
    /// Always lands in `Ready`: on failure the collection is empty and the
    /// fetch banner is shown, so the user can keep interacting.
    pub async fn load(&mut self) {
        let result = self.client.list().await;
        self.apply_loaded(result);
    }

    fn apply_loaded(&mut self, result: ClientResult<Vec<Employee>>) {
        match result {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching employees: {e}");
                self.employees.clear();
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.view = View::Ready;
    }

    // ==================== Search ====================

    /// Set the local search term; purely local, no server round-trip
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Rows matching the search term, case-insensitively, on name or email
    pub fn filtered(&self) -> Vec<&Employee> {
        let term = self.search_term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term) || e.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    // ==================== Editing ====================

    /// Open an empty create form
    pub fn open_create(&mut self) {
        self.form = EmployeeForm::default();
        self.view = View::Editing { target: None };
    }

    /// Open an edit form prefilled from the local record
    ///
    /// Returns false when the id is not in the local collection.
    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.employees.iter().find(|e| e.id == id) {
            Some(employee) => {
                self.form = EmployeeForm::from_employee(employee);
                self.view = View::Editing { target: Some(id) };
                true
            }
            None => false,
        }
    }

    /// Discard the form without contacting the server
    pub fn cancel(&mut self) {
        self.form = EmployeeForm::default();
        self.view = View::Ready;
    }

    /// Submit the open form
    ///
    /// Validates locally first; invalid input never reaches the wire. On
    /// success the local collection is patched and the console returns to
    /// `Ready`; on failure it stays in `Editing` with the save banner.
    pub async fn submit(&mut self) -> bool {
        let View::Editing { target } = self.view else {
            return false;
        };

        let payload = match self.form.to_payload() {
            Ok(p) => p,
            Err(msg) => {
                self.error = Some(msg);
                return false;
            }
        };

        match target {
            Some(id) => {
                let update = EmployeeUpdate {
                    name: payload.name.clone(),
                    email: payload.email.clone(),
                    phone: payload.phone.clone(),
                    salary: payload.salary,
                };
                match self.client.update(id, &update).await {
                    Ok(_) => {
                        self.apply_updated(id, update);
                        true
                    }
                    Err(e) => {
                        tracing::error!("Error saving employee: {e}");
                        self.error = Some(SAVE_FAILED.to_string());
                        false
                    }
                }
            }
            None => match self.client.create(&payload).await {
                Ok(created) => {
                    self.apply_created(created);
                    true
                }
                Err(e) => {
                    tracing::error!("Error saving employee: {e}");
                    self.error = Some(SAVE_FAILED.to_string());
                    false
                }
            },
        }
    }

    fn apply_created(&mut self, created: Employee) {
        self.employees.push(created);
        self.form = EmployeeForm::default();
        self.error = None;
        self.view = View::Ready;
    }

    fn apply_updated(&mut self, id: i64, update: EmployeeUpdate) {
        if let Some(emp) = self.employees.iter_mut().find(|e| e.id == id) {
            emp.name = update.name;
            emp.email = update.email;
            emp.phone = update.phone;
            emp.salary = update.salary;
        }
        self.form = EmployeeForm::default();
        self.error = None;
        self.view = View::Ready;
    }

    // ==================== Delete ====================

    /// Delete an employee
    ///
    /// On success the record is removed locally; on failure the collection
    /// is untouched and the delete banner is shown.
    pub async fn delete(&mut self, id: i64) -> bool {
        match self.client.delete(id).await {
            Ok(()) => {
                self.apply_deleted(id);
                true
            }
            Err(e) => {
                tracing::error!("Error deleting employee: {e}");
                self.error = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    fn apply_deleted(&mut self, id: i64) {
        self.employees.retain(|e| e.id != id);
        self.error = None;
    }
}
