mod config_host_port;

pub use config_host_port::{ConfigHostPort, DeckIntrospection, EditableField, HostCapabilities};
