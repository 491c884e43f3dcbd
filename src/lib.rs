pub mod shared {
    pub mod http;
}

pub mod modules {
    pub mod albums {
        pub mod core {
            pub mod album;
            pub mod ports;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_albums {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_album {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_album {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_album {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_album {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod album_repository_in_memory;
            }
        }
    }
}

pub mod shell;
