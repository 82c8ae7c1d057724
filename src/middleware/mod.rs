pub mod batch_id;
