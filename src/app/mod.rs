pub mod radarr;
pub mod readarr;

mod remote_path_mapping;
mod resource;
