pub mod cliente;
pub mod cuenta;
pub mod movimiento;
pub mod reporte;
