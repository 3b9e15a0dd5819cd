pub mod demo_tab;
