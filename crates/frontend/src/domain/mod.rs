pub mod a001_cliente;
pub mod a002_cuenta;
pub mod a003_movimiento;
