// src/usuarios/mod.rs

// Declara o submódulo que contém os papéis de acesso
pub mod usuario_structs;
// Declara o submódulo de verificação de senhas (bcrypt)
pub mod auth;
// Declara o submódulo com os menus da área administrativa
pub mod admin_menu;
