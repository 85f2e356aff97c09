pub mod eig;
