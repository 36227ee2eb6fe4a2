use crate::macros::parameter_object;
use crate::types::ParameterList;

parameter_object! {
    /// Cell access restrictions broadcast in system information.
    pub struct CellRestriction("FAPService.{i}.CellConfig.UMTS.RAN.CellRestriction.") {
        cell_barred: value bool => "CellBarred",
        intra_freq_cell_reselection_indicator: value bool => "IntraFreqCellReselectionIndicator",
        /// Seconds; one of 10, 20, 40, 80, 160, 320, 640, 1280.
        t_barred: value u32 => "TBarred",
        /// Barred access classes, each 0..15.
        access_class_barred: value ParameterList<u32> => "AccessClassBarred",
        cell_reserved_for_operator_use: value bool => "CellReservedForOperatorUse",
        cell_reservation_extension: value bool => "CellReservationExtension",
    }
}
