//! Turkish diagnostic texts for every [`DiseaseKey`]

use super::keys::DiseaseKey;

/// `(display name, description, remedy)` for a disease
pub(crate) fn builtin_text(key: DiseaseKey) -> (&'static str, &'static str, &'static str) {
    match key {
        DiseaseKey::AppleScab => (
            "Karaleke (Elma Kara Lekesi)",
            "Venturia inaequalis mantarının neden olduğu, yapraklarda ve meyvelerde zeytin yeşili ile kahverengi arası kadifemsi lekelerle başlayan bir hastalıktır.",
            "Düşen yaprakları toplayıp imha edin, ağacın havalanmasını budamayla artırın ve ilkbaharda uygun bir fungisit programı uygulayın.",
        ),
        DiseaseKey::BlackRot => (
            "Kara Çürüklük",
            "Yapraklarda mor kenarlı kahverengi lekeler, meyvelerde ise siyahlaşan ve büzüşen çürüklükler oluşturan mantar hastalığıdır.",
            "Hastalıklı dal, meyve ve mumyalaşmış meyveleri uzaklaştırın; budama yaralarını koruyun ve çiçeklenme döneminde fungisit uygulayın.",
        ),
        DiseaseKey::CedarAppleRust => (
            "Sedir-Elma Pası",
            "Ardıç türleri ile elma arasında yaşam döngüsünü tamamlayan, yapraklarda parlak turuncu-sarı lekeler oluşturan pas hastalığıdır.",
            "Yakındaki ardıç konukçularını kontrol edin, dayanıklı çeşitler tercih edin ve yaprak açımından itibaren koruyucu ilaçlama yapın.",
        ),
        DiseaseKey::PowderyMildew => (
            "Külleme",
            "Yaprak ve sürgünlerin üzerinde beyaz, un görünümlü bir tabaka oluşturan; sıcak ve kuru günlerle nemli gecelerde hızla yayılan mantar hastalığıdır.",
            "Enfekte sürgünleri budayın, sık dikimden kaçının ve kükürt içerikli veya sistemik bir fungisit kullanın.",
        ),
        DiseaseKey::CercosporaLeafSpot => (
            "Cercospora Yaprak Lekesi (Gri Yaprak Lekesi)",
            "Yapraklarda damarlara paralel uzanan dikdörtgen, gri-kahverengi lekelerle kendini gösteren ve verimi düşüren mantar hastalığıdır.",
            "Ekim nöbeti uygulayın, hasat artıklarını toprağa gömün, dayanıklı hibritler kullanın ve gerekirse fungisit uygulayın.",
        ),
        DiseaseKey::CommonRust => (
            "Yaygın Pas",
            "Yaprağın her iki yüzünde kızılkahverengi, toz halinde püstüller oluşturan pas mantarı hastalığıdır.",
            "Dayanıklı çeşitleri tercih edin, erken dönem yoğun enfeksiyonlarda fungisit uygulayın ve bitki sıklığını dengeleyin.",
        ),
        DiseaseKey::NorthernLeafBlight => (
            "Kuzey Yaprak Yanıklığı",
            "Yapraklarda uzun, puro şeklinde gri-yeşil lezyonlar oluşturan ve nemli koşullarda hızla ilerleyen mantar hastalığıdır.",
            "Hastalıklı bitki artıklarını temizleyin, ekim nöbeti yapın, dayanıklı çeşit kullanın ve belirtiler yayılırsa fungisit uygulayın.",
        ),
        DiseaseKey::Esca => (
            "Esca (Siyah Kızamık)",
            "Asmanın odun dokusunu etkileyen, yapraklarda kaplan çizgisi görünümlü renk bozulmaları ve meyvelerde siyah noktalar oluşturan karmaşık bir gövde hastalığıdır.",
            "Budamayı kuru havada yapın, budama yaralarını macunla kapatın ve ağır enfekte kütükleri bağdan uzaklaştırın.",
        ),
        DiseaseKey::IsariopsisLeafSpot => (
            "Yaprak Yanıklığı (Isariopsis Yaprak Lekesi)",
            "Asma yapraklarında düzensiz, koyu kahverengi lekeler oluşturan ve erken yaprak dökümüne yol açan mantar hastalığıdır.",
            "Dökülen yaprakları toplayın, asmanın havalanmasını sağlayın ve bakır içerikli koruyucu ilaçlar kullanın.",
        ),
        DiseaseKey::CitrusGreening => (
            "Turunçgil Yeşillenme Hastalığı (Huanglongbing)",
            "Psilla böcekleriyle taşınan bir bakterinin neden olduğu; yapraklarda asimetrik sararma, küçük ve acı meyvelere yol açan tedavisi olmayan bir hastalıktır.",
            "Vektör psilla popülasyonunu kontrol altına alın, enfekte ağaçları sökerek imha edin ve yalnızca sertifikalı fidan kullanın.",
        ),
        DiseaseKey::BacterialSpot => (
            "Bakteriyel Leke",
            "Yaprak ve meyvelerde su emmiş görünümlü, zamanla kahverengileşen küçük lekeler oluşturan bakteriyel hastalıktır.",
            "Sertifikalı tohum kullanın, üstten sulamadan kaçının, bakır içerikli preparatlar uygulayın ve hastalıklı bitkileri uzaklaştırın.",
        ),
        DiseaseKey::EarlyBlight => (
            "Erken Yanıklık",
            "Alternaria mantarının yaşlı yapraklarda iç içe halkalı, hedef tahtası görünümlü kahverengi lekeler oluşturduğu hastalıktır.",
            "Alt yaprakları temizleyin, bitkiyi dengeli gübreleyin, ekim nöbeti uygulayın ve koruyucu fungisit kullanın.",
        ),
        DiseaseKey::LateBlight => (
            "Geç Yanıklık (Mildiyö)",
            "Phytophthora infestans'ın serin ve nemli havada yaprak, gövde ve yumrularda hızla yayılan koyu, yağlı görünümlü lekeler oluşturduğu yıkıcı hastalıktır.",
            "Enfekte bitkileri derhal imha edin, yaprakları kuru tutun ve hastalık tahmin uyarılarına göre sistemik fungisit uygulayın.",
        ),
        DiseaseKey::LeafScorch => (
            "Yaprak Yanıklığı (Yaprak Kavrulması)",
            "Çilek yapraklarında mor-kırmızı küçük lekelerle başlayıp yaprak kenarlarının kavrulmuş görünmesine yol açan mantar hastalığıdır.",
            "Yaşlı ve lekeli yaprakları temizleyin, damla sulamaya geçin ve sık dikimden kaçının.",
        ),
        DiseaseKey::LeafMold => (
            "Yaprak Küfü",
            "Özellikle sera domateslerinde yaprak üst yüzünde sarı lekeler, alt yüzünde zeytin yeşili küf tabakası oluşturan mantar hastalığıdır.",
            "Seradaki nemi düşürün, havalandırmayı artırın, dayanıklı çeşit kullanın ve hastalıklı yaprakları uzaklaştırın.",
        ),
        DiseaseKey::SeptoriaLeafSpot => (
            "Septoria Yaprak Lekesi",
            "Alt yapraklardan başlayarak koyu kenarlı, ortası gri küçük yuvarlak lekeler oluşturan mantar hastalığıdır.",
            "Hastalıklı yaprakları toplayın, bitki artıklarını imha edin, malçlama yapın ve koruyucu fungisit uygulayın.",
        ),
        DiseaseKey::SpiderMites => (
            "Kırmızı Örümcek (İki Noktalı Kırmızı Örümcek)",
            "Yaprak altında beslenerek noktasal sararmalara, ağır durumlarda ince ağlara ve yaprak dökümüne neden olan akar zararlısıdır.",
            "Yaprak altlarını düzenli kontrol edin, bitkiyi su stresinden koruyun, doğal düşmanları destekleyin ve gerekirse akarisit kullanın.",
        ),
        DiseaseKey::TargetSpot => (
            "Hedef Leke",
            "Yaprak, gövde ve meyvelerde iç içe halkalı, kahverengi hedef tahtası şeklinde lekeler oluşturan mantar hastalığıdır.",
            "Bitki aralarını açarak havalanmayı artırın, alt yaprakları temizleyin ve uygun bir fungisitle ilaçlama yapın.",
        ),
        DiseaseKey::YellowLeafCurlVirus => (
            "Sarı Yaprak Kıvırcıklık Virüsü",
            "Beyaz sinekle taşınan; yapraklarda yukarı doğru kıvrılma, sararma ve bodurlaşmaya neden olan viral hastalıktır.",
            "Beyaz sinekle mücadele edin, tül örtü kullanın, enfekte bitkileri söküp imha edin ve dayanıklı çeşitler tercih edin.",
        ),
        DiseaseKey::MosaicVirus => (
            "Mozaik Virüsü",
            "Yapraklarda açık ve koyu yeşil mozaik desen, şekil bozukluğu ve gelişme geriliği oluşturan, temasla kolayca bulaşan viral hastalıktır.",
            "Enfekte bitkileri uzaklaştırın, alet ve ellerinizi dezenfekte edin, sertifikalı tohum kullanın ve yabancı otları temizleyin.",
        ),
    }
}

/// Remedy used when no specific advice is known
pub const GENERIC_REMEDY: &str =
    "Kesin teşhis ve tedavi için bir ziraat mühendisine veya bitki sağlığı uzmanına danışın.";

/// Remedy shown for healthy plants
pub const HEALTHY_REMEDY: &str =
    "Düzenli sulama, dengeli gübreleme ve periyodik kontrollerle mevcut bakımınıza devam edin.";

/// Marker appended to the plant name for healthy results
pub const HEALTHY_DISPLAY: &str = "Sağlıklı";
