//! Test entities modelled on vault records.
#![allow(dead_code)]

use serde_json::Value;
use vaultwire_serializable::{EncodingResult, FieldReader, FieldWriter, RawObject, Serializable};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn raw(value: Value) -> RawObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ── Account ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub email: String,
    /// In-memory only.
    pub session_token: Option<String>,
}

impl Serializable for Account {
    const TYPE: &'static str = "account";

    fn validate(&self) -> bool {
        !self.email.is_empty()
    }

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("email", &self.email)?;
        fields.field("_session_token", &self.session_token)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(email) = fields.field("email")? {
            self.email = email;
        }
        if let Some(token) = fields.field("_session_token")? {
            self.session_token = token;
        }
        Ok(())
    }
}

// ── Reading ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    pub label: String,
    pub value: f64,
}

impl Serializable for Reading {
    const TYPE: &'static str = "reading";

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("label", &self.label)?;
        fields.field("value", &self.value)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(label) = fields.field("label")? {
            self.label = label;
        }
        if let Some(value) = fields.field("value")? {
            self.value = value;
        }
        Ok(())
    }
}

// ── Login ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Login {
    pub username: String,
    pub password: String,
    pub uris: Vec<String>,
}

impl Serializable for Login {
    const TYPE: &'static str = "login";

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("username", &self.username)?;
        fields.field("password", &self.password)?;
        fields.field("uris", &self.uris)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(username) = fields.field("username")? {
            self.username = username;
        }
        if let Some(password) = fields.field("password")? {
            self.password = password;
        }
        if let Some(uris) = fields.field("uris")? {
            self.uris = uris;
        }
        Ok(())
    }
}

// ── CustomField ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

impl CustomField {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Serializable for CustomField {
    const TYPE: &'static str = "customfield";

    fn validate(&self) -> bool {
        !self.name.is_empty()
    }

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("name", &self.name)?;
        fields.field("value", &self.value)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(name) = fields.field("name")? {
            self.name = name;
        }
        if let Some(value) = fields.field("value")? {
            self.value = value;
        }
        Ok(())
    }
}

// ── VaultItem ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VaultItem {
    pub name: String,
    pub notes: Option<String>,
    pub key: Vec<u8>,
    pub revision: u32,
    pub login: Option<Login>,
    pub fields: Vec<CustomField>,
    /// Decrypted preview, never persisted.
    pub decrypted: Option<String>,
}

impl Serializable for VaultItem {
    const TYPE: &'static str = "vaultitem";

    fn validate(&self) -> bool {
        !self.name.is_empty()
            && self.login.as_ref().is_none_or(Serializable::validate)
            && self.fields.iter().all(Serializable::validate)
    }

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("name", &self.name)?;
        fields.field("notes", &self.notes)?;
        fields.bytes("key", &self.key)?;
        fields.field("revision", &self.revision)?;
        fields.optional_entity("login", self.login.as_ref())?;
        fields.entities("fields", &self.fields)?;
        fields.field("_decrypted", &self.decrypted)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(name) = fields.field("name")? {
            self.name = name;
        }
        if let Some(notes) = fields.field("notes")? {
            self.notes = notes;
        }
        if let Some(key) = fields.bytes("key")? {
            self.key = key;
        }
        if let Some(revision) = fields.field("revision")? {
            self.revision = revision;
        }
        if let Some(login) = fields.optional_entity("login")? {
            self.login = login;
        }
        if let Some(custom) = fields.entities("fields")? {
            self.fields = custom;
        }
        Ok(())
    }
}

pub fn sample_item() -> VaultItem {
    VaultItem {
        name: "Bank".into(),
        notes: Some("pin in safe".into()),
        key: vec![1, 2, 3],
        revision: 7,
        login: Some(Login {
            username: "alice".into(),
            password: "hunter2".into(),
            uris: vec!["https://bank.example".into()],
        }),
        fields: vec![CustomField::new("pin", "1234")],
        decrypted: None,
    }
}

// ── Folder ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    pub name: String,
    pub items: Vec<VaultItem>,
}

impl Serializable for Folder {
    const TYPE: &'static str = "folder";

    fn validate(&self) -> bool {
        !self.name.is_empty() && self.items.iter().all(Serializable::validate)
    }

    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()> {
        fields.field("name", &self.name)?;
        fields.entities("items", &self.items)
    }

    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()> {
        if let Some(name) = fields.field("name")? {
            self.name = name;
        }
        if let Some(items) = fields.entities("items")? {
            self.items = items;
        }
        Ok(())
    }
}
