pub mod wol;
