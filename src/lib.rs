pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod directory;
        pub mod sessions;
        pub mod store_error;
        pub mod time_entry_store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod accrual;
            pub mod actor;
            pub mod authorization;
            pub mod errors;
            pub mod policy;
            pub mod project;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod resolve_actor {
                pub mod credentials;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod query;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clock_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod error_response;
                pub mod graphql_types;
            }
        }
    }
}

pub mod shell;
