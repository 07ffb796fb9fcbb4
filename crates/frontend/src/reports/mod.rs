pub mod r001_estado_cuenta;
