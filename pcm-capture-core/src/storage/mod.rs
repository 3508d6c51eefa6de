pub mod asset_writer;
