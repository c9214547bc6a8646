fn main() {
    multiversx_sc_meta_lib::cli_main::<account_factory_mock::AbiProvider>();
}
