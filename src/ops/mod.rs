pub mod todo_ops;
