pub mod vault_agent;
