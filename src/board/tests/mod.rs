//! Unit and behaviour tests for the board synchronization core.
