pub mod character_details;
pub mod character_graph;
pub mod characters_modal;
pub mod force_graph;
pub mod pagination;
pub mod preloader;
