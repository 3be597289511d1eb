//! Static device table.
//!
//! @generated by `devicename generate --table`. Rows are ordered by manufacturer
//! and then by market name; identifiers are unique across rows.

use crate::PopularDevice;

/// Every product known to the static resolver, in lookup priority order.
pub static DEVICES: &[PopularDevice] = &[
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Iconia Tab 10",
        codenames: &["acer_harley", "acer_harleyfhd"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Iconia Tab 7",
        codenames: &["acer_aprilia", "acer_apriliahd"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Iconia Tab 8",
        codenames: &["ducati2fhd", "ducati2hd", "ducati2hd3g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid",
        codenames: &["a1"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid E3",
        codenames: &["acer_e3", "acer_e3n"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid Jade",
        codenames: &["acer_S55"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid Jade S",
        codenames: &["acer_S56"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid S3",
        codenames: &["s3"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Acer",
        market_name: "Liquid Z5",
        codenames: &["acer_ZXL"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Asus",
        market_name: "MeMO Pad 7",
        codenames: &["K013C"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Asus",
        market_name: "Nexus 7 (2012)",
        codenames: &["grouper", "tilapia"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Asus",
        market_name: "Nexus 7 (2013)",
        codenames: &["deb", "flo"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Asus",
        market_name: "ZenFone 5",
        codenames: &[],
        models: &["ASUS_T00F", "ASUS_T00J"],
    },
    PopularDevice {
        manufacturer: "Dell",
        market_name: "Venue 7",
        codenames: &["LW", "Venue7", "thunderbird"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Dell",
        market_name: "Venue 8",
        codenames: &["BB", "Venue8", "yellowtail"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One",
        codenames: &["m7", "m7cdtu", "m7cdug", "m7cdwg", "m7wls", "m7wlv"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One (E8)",
        codenames: &["htc_mecdwg", "htc_mectl", "htc_mecul", "htc_mecwhl"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One (M8)",
        codenames: &["htc_m8", "htc_m8dug", "htc_m8dwg", "htc_m8whl", "htc_m8wl"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One A9",
        codenames: &["htc_hiaetuhl", "htc_hiaeuhl", "htc_hiaeul", "htc_hiaewhl"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One M9",
        codenames: &["htc_himauhl", "htc_himaul", "htc_himaulatt", "htc_himawhl", "htc_himawl"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "HTC One S",
        codenames: &["ville", "villec2"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "HTC",
        market_name: "Nexus 9",
        codenames: &["flounder"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Huawei",
        market_name: "Honor3",
        codenames: &["hwH30-T10", "hwH30-U10", "hwhn3-u00", "hwhn3-u01"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Huawei",
        market_name: "Mate S",
        codenames: &["HWCRR"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Huawei",
        market_name: "Nexus 6P",
        codenames: &["angler"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Lenovo",
        market_name: "Lenovo A7-30GC",
        codenames: &[],
        models: &["A7-30GC"],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG G Flex",
        codenames: &["zee"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG G Flex2",
        codenames: &["z2"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG G2",
        codenames: &["g2"],
        models: &["D800", "D801", "D802", "LS980", "VS980"],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG G3",
        codenames: &["g3"],
        models: &["D850", "D851", "D855", "LS990", "VS985"],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG G4",
        codenames: &["p1"],
        models: &["H810", "H811", "H815", "LS991", "VS986"],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG Leon 4G LTE",
        codenames: &["c50", "c50ds", "c50n"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG Optimus 3D",
        codenames: &["cosmopolitan"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG Optimus G",
        codenames: &["geeb", "geehdc", "geehrc", "geehrc4g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG Optimus G Pro",
        codenames: &["geefhd", "geefhd4g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "LG Optimus L9",
        codenames: &["u2"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Nexus 4",
        codenames: &["mako"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Nexus 5",
        codenames: &["hammerhead"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Nexus 5X",
        codenames: &["bullhead"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus 2X",
        codenames: &[
            "p990", "p990_262-xx", "p990_CIS-xxx", "p990_EUR-xx", "p990hN", "p999", "star",
            "star_450-05", "su660",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus 3D",
        codenames: &["cosmo_450-05", "cosmo_EUR-XXX", "cosmo_MEA-XXX", "p920", "su760"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus 3D MAX",
        codenames: &["cx2"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus Black",
        codenames: &[
            "LGL85C", "black", "blackg", "bproj_214-03", "bproj_262-XXX", "bproj_302-220",
            "bproj_334-020", "bproj_724-xxx", "bproj_ARE-XXX", "bproj_EUR-XXX", "bproj_sea-xxx",
            "ku5900", "lgp970",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus L5",
        codenames: &["m4"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus LTE",
        codenames: &["i_dcm", "i_skt", "i_u", "iproj", "lgp930", "lgp935"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus One",
        codenames: &["ku3700", "lu3700", "su370", "thunder_kor-05", "thunder_kor-08", "thunderc"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "LGE",
        market_name: "Optimus Pad",
        codenames: &[
            "l06c", "v900", "v900asia", "v901ar", "v901kr", "v901tr", "v905r", "v909", "v909mkt",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "DROID Turbo",
        codenames: &["quark"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "MOTO E",
        codenames: &[
            "condor_cdma", "condor_udstv", "condor_umts", "condor_umtsds", "otus", "otus_ds",
            "surnia_cdma", "surnia_uds", "surnia_udstv", "surnia_umts",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "MOTO G",
        codenames: &[
            "falcon_cdma", "falcon_umts", "falcon_umtsds", "osprey_cdma", "osprey_u2",
            "osprey_ud2", "osprey_uds", "osprey_udstv", "osprey_umts", "peregrine", "thea",
            "thea_ds", "thea_umtsds", "titan_udstv", "titan_umts", "titan_umtsds",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "MOTO X",
        codenames: &["ghost", "victara"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "Moto X Style",
        codenames: &["clark"],
        models: &["XT1570", "XT1572"],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "Nexus 6",
        codenames: &["shamu"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Motorola",
        market_name: "XOOM",
        codenames: &["stingray", "umts_everest", "umts_hubble", "wifi_hubble", "wingray"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "OnePlus",
        market_name: "OnePlus",
        codenames: &["OnePlus"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "OnePlus",
        market_name: "OnePlus One",
        codenames: &["bacon"],
        models: &["A0001"],
    },
    PopularDevice {
        manufacturer: "OnePlus",
        market_name: "OnePlus2",
        codenames: &["OnePlus2"],
        models: &["ONE A2001", "ONE A2003", "ONE A2005"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy A3",
        codenames: &[
            "a33g", "a3lte", "a3ltechn", "a3ltectc", "a3ltedd", "a3lteslk", "a3ltezh", "a3ltezt",
            "a3ulte",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy A5",
        codenames: &[
            "a53g", "a5lte", "a5ltechn", "a5ltectc", "a5ltezh", "a5ltezt", "a5ulte", "a5ultebmc",
            "a5ultektt", "a5ultelgt", "a5ulteskt",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy A8",
        codenames: &["a8elte", "a8elteskt", "a8hplte", "a8ltechn"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Ace 4",
        codenames: &["vivaltods5m"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Ace Duos",
        codenames: &[],
        models: &[
            "GT-S6352", "GT-S6802", "GT-S6802B", "SCH-I579", "SCH-I589", "SCH-i579", "SCH-i589",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Ace Plus",
        codenames: &[],
        models: &["GT-S7500", "GT-S7500L", "GT-S7500T", "GT-S7500W", "GT-S7508"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Ace Style",
        codenames: &["heat3gtfnvzw", "heatnfc3g", "heatqlte"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Ace4",
        codenames: &["vivalto3g", "vivalto3mve3g", "vivalto5mve3g", "vivaltolte", "vivaltonfc3g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Alpha",
        codenames: &["slte", "slteatt", "sltecan", "sltechn", "sltektt", "sltelgt", "slteskt"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Core Prime",
        codenames: &[
            "core33g", "coreprimelte", "coreprimelteaio", "coreprimeltelra", "coreprimeltespr",
            "coreprimeltetfnvzw", "coreprimeltevzw", "coreprimeve3g", "coreprimevelte",
            "cprimeltemtr", "cprimeltetmo", "rossalte", "rossaltectc", "rossaltexsa",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Core2",
        codenames: &["kanas", "kanas3g", "kanas3gcmcc", "kanas3gctc", "kanas3gnfc"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy E5",
        codenames: &["e53g", "e5lte", "e5ltetfnvzw", "e5ltetw"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy E7",
        codenames: &["e73g", "e7lte", "e7ltechn", "e7ltectc", "e7ltehktw"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Fame",
        codenames: &[
            "nevis", "nevis3g", "nevis3gcmcc", "nevisds", "nevisnvess", "nevisp", "nevisvess",
            "nevisw",
        ],
        models: &["SCH-I629"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Go Prime",
        codenames: &["grandprimelteatt"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Grand Neo",
        codenames: &["baffinlite", "baffinlitedtv", "baffinq3g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Grand Prime",
        codenames: &[
            "fortuna3g", "fortuna3gdtv", "fortunalte", "fortunaltectc", "fortunaltezh",
            "fortunaltezt", "gprimelteacg", "gprimeltecan", "gprimeltemtr", "gprimeltespr",
            "gprimeltetfnvzw", "gprimeltetmo", "gprimelteusc", "grandprimelte", "grandprimelteaio",
            "grandprimeve3g", "grandprimeve3gdtv", "grandprimevelte", "grandprimevelteltn",
            "grandprimeveltezt",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Grand2",
        codenames: &[
            "ms013g", "ms013gdtv", "ms013gss", "ms01lte", "ms01ltektt", "ms01ltelgt", "ms01lteskt",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy J7",
        codenames: &["j75ltektt", "j7e3g", "j7elte", "j7ltechn"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Nexus",
        codenames: &["maguro", "toro", "toroplus"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note 10.1",
        codenames: &[
            "lt033g", "lt03ltektt", "lt03ltelgt", "lt03lteskt", "p4notelte", "p4noteltektt",
            "p4noteltelgt", "p4notelteskt", "p4noteltespr", "p4notelteusc", "p4noteltevzw",
            "p4noterf", "p4noterfktt", "p4notewifi", "p4notewifi43241any", "p4notewifiany",
            "p4notewifiktt", "p4notewifiww",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note Edge",
        codenames: &[
            "SCL24", "tbeltektt", "tbeltelgt", "tbelteskt", "tblte", "tblteatt", "tbltecan",
            "tbltechn", "tbltespr", "tbltetmo", "tblteusc", "tbltevzw",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note Pro 12.2",
        codenames: &[
            "v1a3g", "v1awifi", "v1awifikx", "viennalte", "viennalteatt", "viennaltekx",
            "viennaltevzw",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note2",
        codenames: &[
            "t03g", "t03gchn", "t03gchnduos", "t03gcmcc", "t03gctc", "t03gcuduos", "t0lte",
            "t0lteatt", "t0ltecan", "t0ltecmcc", "t0ltedcm", "t0ltektt", "t0ltelgt", "t0lteskt",
            "t0ltespr", "t0ltetmo", "t0lteusc", "t0ltevzw",
        ],
        models: &["SC-02E"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note3",
        codenames: &[
            "SCL22", "ha3g", "hlte", "hlteatt", "hltecan", "hltektt", "hltelgt", "hlteskt",
            "hltespr", "hltetmo", "hlteusc", "hltevzw", "htdlte",
        ],
        models: &["SC-02F"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note3 Neo",
        codenames: &["frescoltektt", "frescoltelgt", "frescolteskt", "hl3g", "hl3gds", "hllte"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note4",
        codenames: &[
            "tre3caltektt", "tre3caltelgt", "tre3calteskt", "tre3g", "trelte", "treltektt",
            "treltelgt", "trelteskt", "trhplte", "trlte", "trlteatt", "trltecan", "trltechn",
            "trltechnzh", "trltespr", "trltetmo", "trlteusc", "trltevzw",
        ],
        models: &[
            "SM-N910A", "SM-N910C", "SM-N910F", "SM-N910P", "SM-N910T", "SM-N910V", "SM-N910W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Note5",
        codenames: &[
            "noblelte", "noblelteacg", "noblelteatt", "nobleltebmc", "nobleltechn", "nobleltecmcc",
            "nobleltehk", "nobleltektt", "nobleltelgt", "nobleltelra", "noblelteskt",
            "nobleltespr", "nobleltetmo", "noblelteusc", "nobleltevzw",
        ],
        models: &[
            "SM-N920A", "SM-N920C", "SM-N920I", "SM-N920P", "SM-N920T", "SM-N920V", "SM-N920W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy On5",
        codenames: &["o5lte", "o5ltechn"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy On7",
        codenames: &["o7lte", "o7ltechn"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S Duos",
        codenames: &["kylechn", "kyleichn", "kyleopen", "kyletdcmcc"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S Duos2",
        codenames: &["kyleprods"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S Duos3",
        codenames: &["vivalto3gvn"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S2",
        codenames: &["SHV-E110S", "t1cmcc"],
        models: &[
            "GT-I9100", "GT-I9100M", "GT-I9100P", "GT-I9100T", "GT-I9103", "GT-I9108", "GT-I9210T",
            "SC-02C", "SCH-R760X", "SGH-I777", "SGH-S959G", "SGH-T989", "SHW-M250K", "SHW-M250L",
            "SHW-M250S",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S3",
        codenames: &[
            "c1att", "c1ktt", "c1lgt", "c1skt", "d2att", "d2can", "d2cri", "d2dcm",
            "d2lteMetroPCS", "d2lterefreshspr", "d2ltetmo", "d2mtr", "d2spi", "d2spr", "d2tfnspr",
            "d2tfnvzw", "d2tmo", "d2usc", "d2vmu", "d2vzw", "d2xar", "m0", "m0apt", "m0chn",
            "m0cmcc", "m0ctc", "m0ctcduos", "m0skt", "m3", "m3dcm",
        ],
        models: &["GT-I9300", "SC-03E", "SCH-I535", "SGH-I747", "SGH-T999", "SPH-L710"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S3 Mini",
        codenames: &["golden", "goldenlteatt", "goldenltebmc", "goldenltevzw", "goldenve3g"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S3 Neo",
        codenames: &["s3ve3g", "s3ve3gdd", "s3ve3gds", "s3ve3gdsdd"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S4",
        codenames: &[
            "ja3g", "ja3gduosctc", "jaltektt", "jaltelgt", "jalteskt", "jflte", "jflteaio",
            "jflteatt", "jfltecan", "jfltecri", "jfltecsp", "jfltelra", "jflterefreshspr",
            "jfltespr", "jfltetfnatt", "jfltetfntmo", "jfltetmo", "jflteusc", "jfltevzw",
            "jfltevzwpp", "jftdd", "jfvelte", "jfwifi", "jsglte", "ks01lte", "ks01ltektt",
            "ks01ltelgt",
        ],
        models: &[
            "GT-I9500", "GT-I9505", "SC-04E", "SCH-I545", "SGH-I337", "SGH-M919", "SPH-L720",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S4 Mini",
        codenames: &[
            "serrano3g", "serranods", "serranolte", "serranoltebmc", "serranoltektt",
            "serranoltekx", "serranoltelra", "serranoltespr", "serranolteusc", "serranoltevzw",
            "serranove3g", "serranovelte", "serranovolteatt",
        ],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S5",
        codenames: &[
            "SCL23", "k3g", "klte", "klteMetroPCS", "klteacg", "klteaio", "klteatt", "kltecan",
            "klteduoszn", "kltektt", "kltelgt", "kltelra", "klteskt", "kltespr", "kltetmo",
            "klteusc", "kltevzw", "kwifi", "lentisltektt", "lentisltelgt", "lentislteskt",
        ],
        models: &[
            "SM-G900A", "SM-G900F", "SM-G900H", "SM-G900I", "SM-G900P", "SM-G900T", "SM-G900V",
            "SM-G900W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S5 Neo",
        codenames: &["s5neolte", "s5neoltecan"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S6",
        codenames: &[
            "zeroflte", "zeroflteacg", "zeroflteaio", "zeroflteatt", "zerofltebmc", "zerofltechn",
            "zerofltectc", "zerofltektt", "zerofltelgt", "zerofltelra", "zerofltemtr",
            "zeroflteskt", "zerofltespr", "zerofltetfnvzw", "zerofltetmo", "zeroflteusc",
            "zerofltevzw",
        ],
        models: &[
            "SM-G920A", "SM-G920F", "SM-G920I", "SM-G920P", "SM-G920T", "SM-G920V", "SM-G920W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S6 Edge",
        codenames: &[
            "SCV31", "zerolte", "zerolteacg", "zerolteatt", "zeroltebmc", "zeroltechn",
            "zeroltektt", "zeroltelgt", "zeroltelra", "zerolteskt", "zeroltespr", "zeroltetmo",
            "zerolteusc", "zeroltevzw",
        ],
        models: &[
            "404SC", "SM-G925A", "SM-G925F", "SM-G925I", "SM-G925P", "SM-G925T", "SM-G925V",
            "SM-G925W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy S6 Edge+",
        codenames: &[
            "zenlte", "zenlteatt", "zenltebmc", "zenltechn", "zenltektt", "zenltekx", "zenltelgt",
            "zenlteskt", "zenltespr", "zenltetmo", "zenltevzw",
        ],
        models: &[
            "SM-G928A", "SM-G928F", "SM-G928I", "SM-G928P", "SM-G928T", "SM-G928V", "SM-G928W8",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Tab 10.1",
        codenames: &[],
        models: &[
            "GT-P7500", "GT-P7500D", "GT-P7503", "GT-P7510", "SC-01D", "SCH-I905", "SGH-T859",
            "SHW-M300W", "SHW-M380K", "SHW-M380S", "SHW-M380W",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Tab 7.0 Plus",
        codenames: &[],
        models: &[
            "GT-P6200", "GT-P6200L", "GT-P6201", "GT-P6210", "GT-P6211", "SC-02D", "SGH-T869",
            "SHW-M430W",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Tab E 8.0",
        codenames: &["gtesqltespr", "gtesqlteusc"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Tab E 9.6",
        codenames: &["gtel3g", "gtelltevzw", "gtelwifi", "gtelwifichn", "gtelwifiue"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Tab4 7.0",
        codenames: &[
            "degas3g", "degaslte", "degasltespr", "degasltevzw", "degasvelte", "degasveltechn",
            "degaswifi", "degaswifibmwzc", "degaswifidtv", "degaswifiopenbnn", "degaswifiue",
        ],
        models: &["403SC"],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy View",
        codenames: &["gvlte", "gvlteatt", "gvltexsp", "gvwifiue"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Galaxy Y",
        codenames: &[],
        models: &[
            "GT-S5360", "GT-S5360B", "GT-S5360L", "GT-S5360T", "GT-S5363", "GT-S5368", "GT-S5369",
            "SCH-I509", "SCH-i509",
        ],
    },
    PopularDevice {
        manufacturer: "Samsung",
        market_name: "Nexus 10",
        codenames: &["manta"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia E1 dual",
        codenames: &[],
        models: &["D2104", "D2105"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia E3",
        codenames: &[],
        models: &["D2202", "D2203", "D2206", "D2243"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia M5",
        codenames: &[],
        models: &["E5603", "E5606", "E5653"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia M5 Dual",
        codenames: &[],
        models: &["E5633", "E5643", "E5663"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia S",
        codenames: &[],
        models: &["LT26i", "SO-02D"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia T2 Ultra",
        codenames: &[],
        models: &["D5303", "D5306", "D5316", "D5316N", "D5322"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Tablet S",
        codenames: &["txs03"],
        models: &[],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Tablet Z",
        codenames: &[],
        models: &["SGP311", "SGP312", "SGP321", "SGP341", "SGP351", "SO-03E"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Z2",
        codenames: &[],
        models: &["D6502", "D6503", "D6543", "SO-03F"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Z3",
        codenames: &["leo"],
        models: &["401SO", "D6603", "D6616", "D6643", "D6646", "D6653", "SO-01G", "SOL26"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Z4",
        codenames: &[],
        models: &["402SO", "SO-03G", "SOV31"],
    },
    PopularDevice {
        manufacturer: "Sony",
        market_name: "Xperia Z5 Compact",
        codenames: &[],
        models: &["E5803", "E5823", "SO-02H"],
    },
];
