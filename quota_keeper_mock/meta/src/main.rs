fn main() {
    multiversx_sc_meta_lib::cli_main::<quota_keeper_mock::AbiProvider>();
}
